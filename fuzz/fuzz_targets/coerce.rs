#![no_main]

use libfuzzer_sys::fuzz_target;
use opencast::{cast_to_number, Number, Numeric, Wide};

fn check<T: Numeric>(number: Number) {
    let result = cast_to_number::<T>(number.as_dynamic());
    if !T::KIND.is_integer() || result == T::default() {
        return;
    }
    let Some(bounds) = T::KIND.bounds() else {
        return;
    };
    let wide = match number.widen() {
        Wide::Signed(n) => i128::from(n),
        Wide::Unsigned(n) => i128::from(n),
        Wide::Float(n) => panic!("{n} narrowed into {}", T::KIND),
    };
    assert!(bounds.contains(&wide), "{number} wrapped into {}", T::KIND);
}

fuzz_target!(|number: Number| {
    check::<i8>(number);
    check::<i16>(number);
    check::<i32>(number);
    check::<i64>(number);
    check::<isize>(number);
    check::<u8>(number);
    check::<u16>(number);
    check::<u32>(number);
    check::<u64>(number);
    check::<usize>(number);
    check::<f32>(number);
    check::<f64>(number);
    assert_eq!(Number::of(number.as_dynamic()).map(Number::kind), Some(number.kind()));
});
