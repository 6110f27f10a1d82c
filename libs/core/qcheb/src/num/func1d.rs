// -----------------------------------------------------------------------------
// Func1d
// -----------------------------------------------------------------------------
/// A function of one argument whose evaluation may fail,
/// e.g. when the argument lies outside of the domain of the function.
pub trait Func1d<Arg> {
    type Output;
    type Error;

    fn eval(&self, arg: &Arg) -> Result<Self::Output, Self::Error>;
}

// -----------------------------------------------------------------------------
// DerX1d
// -----------------------------------------------------------------------------
/// [Func1d] with the first derivative.
pub trait DerX1d<Arg>: Func1d<Arg> {
    type DerX;

    fn der_x(&self, arg: &Arg) -> Result<Self::DerX, Self::Error>;

    /// Value and first derivative at once.
    /// Implementors sharing work between the two should override this.
    #[inline]
    fn der_0_x(&self, arg: &Arg) -> Result<(Self::Output, Self::DerX), Self::Error> {
        Ok((self.eval(arg)?, self.der_x(arg)?))
    }
}

// -----------------------------------------------------------------------------
// DerXX1d
// -----------------------------------------------------------------------------
/// [DerX1d] with the second derivative.
pub trait DerXX1d<Arg>: DerX1d<Arg> {
    type DerXX;

    fn der_xx(&self, arg: &Arg) -> Result<Self::DerXX, Self::Error>;

    #[inline]
    #[allow(clippy::type_complexity)]
    fn der_0_x_xx(
        &self,
        arg: &Arg,
    ) -> Result<(Self::Output, Self::DerX, Self::DerXX), Self::Error> {
        let (val, der_x) = self.der_0_x(arg)?;
        Ok((val, der_x, self.der_xx(arg)?))
    }
}
