use super::Processor as ProcessorTrait;
use super::*;

/// Processor for complex-valued matrices, running complex FFTs along both axes.
pub struct Processor<T: FftNum> {
    cp: rustfft::FftPlanner<T>,
    _phantom: PhantomData<Complex<T>>,
}

impl<T: FftNum> Default for Processor<T> {
    fn default() -> Self {
        Self {
            cp: rustfft::FftPlanner::new(),
            _phantom: Default::default(),
        }
    }
}

impl<T: FftNum> ProcessorTrait<T, Complex<T>> for Processor<T> {
    /// Returns a spectrum of shape `(cols, rows)`.
    fn forward(
        &mut self,
        input: &mut Array2<Complex<T>>,
    ) -> Result<Array2<Complex<T>>, Error> {
        process_rows(&mut self.cp, rustfft::FftDirection::Forward, input)?;

        let mut output = transposed(input)?;
        process_rows(&mut self.cp, rustfft::FftDirection::Forward, &mut output)?;

        Ok(output)
    }

    fn backward(
        &mut self,
        input: &mut Array2<Complex<T>>,
    ) -> Result<Array2<Complex<T>>, Error> {
        process_rows(&mut self.cp, rustfft::FftDirection::Inverse, input)?;

        let mut output = transposed(input)?;
        process_rows(&mut self.cp, rustfft::FftDirection::Inverse, &mut output)?;

        normalize::<T, _>(&mut output)?;
        Ok(output)
    }
}
