// A fallible view from one representation into another. Option rather than Result:
// the caller picks the fallback, and there is nothing useful to report beyond "no".
pub trait TryAs<To>: Sized {
    fn try_as(self) -> Option<To>;
}

pub trait TryCast<From>: Sized {
    fn try_cast(value: From) -> Option<Self>;
}

impl<From, To> TryCast<From> for To
where
    From: TryAs<To>,
{
    fn try_cast(value: From) -> Option<Self> {
        value.try_as()
    }
}
