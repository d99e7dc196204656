/// Allows any value to be moved into a [Result] with method syntax, which keeps long builder
/// chains readable at the end of a function.
pub trait ResultExtensions
where
    Self: Sized,
{
    fn to_ok<E>(self) -> Result<Self, E> {
        Ok(self)
    }

    fn to_err<T>(self) -> Result<T, Self> {
        Err(self)
    }
}
impl<T> ResultExtensions for T {}
