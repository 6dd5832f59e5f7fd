use super::Processor as ProcessorTrait;
use super::*;

/// Processor for real-valued matrices.
///
/// The last axis is transformed real-to-complex, so a spectrum keeps only the
/// `cols / 2 + 1` non-redundant bins of each row. The inverse ends with the
/// matching complex-to-real transform, which yields the real part of the
/// inverse DFT directly.
pub struct Processor<T: ConvFftNum> {
    rp: realfft::RealFftPlanner<T>,
    rp_origin_len: usize,
    cp: rustfft::FftPlanner<T>,
}

impl<T: ConvFftNum> Default for Processor<T> {
    fn default() -> Self {
        Self {
            rp: Default::default(),
            rp_origin_len: Default::default(),
            cp: rustfft::FftPlanner::new(),
        }
    }
}

impl<T: ConvFftNum> ProcessorTrait<T, T> for Processor<T> {
    /// Performs a forward FFT on the given input matrix.
    ///
    /// This computes a real-to-complex FFT on every (contiguous) row, then
    /// transposes the half spectrum and runs complex FFTs along what were the
    /// columns. The returned spectrum has shape `(cols / 2 + 1, rows)`.
    fn forward(&mut self, input: &mut Array2<T>) -> Result<Array2<Complex<T>>, Error> {
        let (rows, cols) = input.dim();
        if rows == 0 || cols == 0 {
            return Err(Error::EmptyBuffer { rows, cols });
        }
        let rp = self.rp.plan_fft_forward(cols);
        self.rp_origin_len = cols;
        let complex_len = rp.complex_len();
        log::trace!("real fft of length {cols} over {rows} rows");

        let mut half = try_zeros((rows, complex_len))?;
        let mut scratch = rp.make_scratch_vec();
        for (input_row, output_row) in contiguous(input)?
            .chunks_exact_mut(cols)
            .zip(contiguous(&mut half)?.chunks_exact_mut(complex_len))
        {
            rp.process_with_scratch(input_row, output_row, &mut scratch)?;
        }

        let mut output = transposed(&half)?;
        process_rows(&mut self.cp, rustfft::FftDirection::Forward, &mut output)?;

        Ok(output)
    }

    /// Performs an inverse FFT on a spectrum produced by `forward`.
    ///
    /// Inverse complex FFTs run along the leading axis first, then the result
    /// is transposed back and every row goes through the complex-to-real
    /// inverse.
    fn backward(&mut self, input: &mut Array2<Complex<T>>) -> Result<Array2<T>, Error> {
        let (complex_len, rows) = input.dim();
        let cols = self.rp_origin_len;
        if cols == 0 || complex_len != cols / 2 + 1 {
            return Err(Error::SpectrumShape {
                expected: (cols / 2 + 1, rows),
                actual: (complex_len, rows),
            });
        }

        process_rows(&mut self.cp, rustfft::FftDirection::Inverse, input)?;
        let mut half = transposed(input)?;

        let rp = self.rp.plan_fft_inverse(cols);
        log::trace!("inverse real fft of length {cols} over {rows} rows");

        let mut output = try_zeros((rows, cols))?;
        let mut scratch = rp.make_scratch_vec();
        for (input_row, output_row) in contiguous(&mut half)?
            .chunks_exact_mut(complex_len)
            .zip(contiguous(&mut output)?.chunks_exact_mut(cols))
        {
            // the DC and Nyquist bins pick up rounding noise in their imaginary
            // parts; realfft ignores it, still writes the output and only
            // reports it
            match rp.process_with_scratch(input_row, output_row, &mut scratch) {
                Ok(()) | Err(realfft::FftError::InputValues(..)) => {}
                Err(err) => return Err(err.into()),
            }
        }

        normalize::<T, _>(&mut output)?;
        Ok(output)
    }
}
