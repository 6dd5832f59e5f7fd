//! Provides FFT-accelerated 2-D convolution.
//!
//! Both operands are zero padded into working buffers of a common size,
//! transformed, multiplied element-wise and transformed back. The product of
//! two DFTs is a cyclic convolution; the padding places the wrap-around
//! outside the region of interest, which is then cut out as the result.

use ndarray::{s, Array2, ArrayBase, Data, Ix2};
use num::traits::NumAssign;
use rustfft::FftNum;

use crate::{padding, BorderMode, Error};

mod good_size;
mod layout;
pub mod processor;


use processor::{GetProcessor, Processor};

/// Configuration of an FFT convolution.
///
/// None of the options change the shape of the result, they only control the
/// size of the working buffers handed to the FFT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FftConvolution {
    /// Which part of the linear convolution is returned.
    pub border_mode: BorderMode,
    /// Append one zero column to the working buffers before transforming, for
    /// callers that want an even transform length on an odd last axis.
    pub pad_last_dim: bool,
    /// Round the working extents up to lengths with small prime factors.
    pub fast_len: bool,
}

impl FftConvolution {
    /// Creates a configuration for `border_mode` with both padding options off.
    pub fn new(border_mode: BorderMode) -> Self {
        Self {
            border_mode,
            ..Default::default()
        }
    }

    /// Sets whether an extra zero column is appended to the working buffers.
    pub fn with_pad_last_dim(self, pad_last_dim: bool) -> Self {
        Self {
            pad_last_dim,
            ..self
        }
    }

    /// Sets whether the working extents are rounded up to fast FFT lengths.
    pub fn with_fast_len(self, fast_len: bool) -> Self {
        Self { fast_len, ..self }
    }

    /// Convolves `input` with `filter`, using a fresh FFT processor.
    ///
    /// # Errors
    ///
    /// * [`Error::EmptyOperand`] if either operand has a zero extent.
    /// * [`Error::FilterLargerThanInput`] in [`BorderMode::Valid`] if the
    ///   filter exceeds the input along any axis.
    /// * [`Error::SizeOverflow`], [`Error::BufferTooLarge`] or
    ///   [`Error::Allocation`] if the working buffers cannot be created.
    pub fn convolve<T, InElem, S, SK>(
        &self,
        input: &ArrayBase<S, Ix2>,
        filter: &ArrayBase<SK, Ix2>,
    ) -> Result<Array2<InElem>, Error>
    where
        T: FftNum,
        InElem: GetProcessor<T, InElem> + NumAssign + Copy,
        S: Data<Elem = InElem>,
        SK: Data<Elem = InElem>,
    {
        self.convolve_with_processor(input, filter, &mut processor::get::<T, InElem>())
    }

    /// Same as [`FftConvolution::convolve`], reusing the plans cached in
    /// `fft_processor`.
    pub fn convolve_with_processor<T, InElem, S, SK>(
        &self,
        input: &ArrayBase<S, Ix2>,
        filter: &ArrayBase<SK, Ix2>,
        fft_processor: &mut impl Processor<T, InElem>,
    ) -> Result<Array2<InElem>, Error>
    where
        T: FftNum,
        InElem: GetProcessor<T, InElem> + NumAssign + Copy,
        S: Data<Elem = InElem>,
        SK: Data<Elem = InElem>,
    {
        let layout = self.border_mode.unfold(
            input.dim(),
            filter.dim(),
            self.pad_last_dim,
            self.fast_len,
        )?;
        log::debug!(
            "{:?} fft convolution of {:?} with {:?}: working {:?}, output {:?}",
            self.border_mode,
            input.dim(),
            filter.dim(),
            layout.working,
            layout.output
        );

        let mut input_padded = padding::zero_extend(input, layout.working, layout.input_offset)?;
        let mut filter_padded = padding::zero_extend(filter, layout.working, (0, 0))?;

        let mut spectrum = fft_processor.forward(&mut input_padded)?;
        let filter_spectrum = fft_processor.forward(&mut filter_padded)?;

        spectrum.zip_mut_with(&filter_spectrum, |s, &k| *s = *s * k);

        let cyclic = fft_processor.backward(&mut spectrum)?;

        let (row, col) = layout.roi_start;
        let (rows, cols) = layout.output;
        Ok(cyclic.slice(s![row..row + rows, col..col + cols]).to_owned())
    }
}

impl From<BorderMode> for FftConvolution {
    fn from(border_mode: BorderMode) -> Self {
        Self::new(border_mode)
    }
}

/// Extends 2-D `ndarray` arrays with FFT-accelerated convolution.
///
/// # Type Parameters
///
/// * `T`: The numeric type used internally for FFT operations (f32 or f64).
/// * `InElem`: The element type of the arrays, `T` or `Complex<T>`.
/// * `S`: The data storage type of the input array.
/// * `SK`: The data storage type of the filter array.
pub trait ConvFftExt<T, InElem, S, SK>
where
    T: FftNum,
    InElem: GetProcessor<T, InElem> + NumAssign + Copy,
    S: Data<Elem = InElem>,
    SK: Data<Elem = InElem>,
{
    /// Convolves `self` with `filter` through the FFT.
    ///
    /// `conv` is a [`FftConvolution`] or just a [`BorderMode`].
    fn conv_fft(
        &self,
        filter: &ArrayBase<SK, Ix2>,
        conv: impl Into<FftConvolution>,
    ) -> Result<Array2<InElem>, Error>;

    /// Like `conv_fft`, with a caller-owned processor whose FFT plans are
    /// reused across calls.
    fn conv_fft_with_processor(
        &self,
        filter: &ArrayBase<SK, Ix2>,
        conv: impl Into<FftConvolution>,
        fft_processor: &mut impl Processor<T, InElem>,
    ) -> Result<Array2<InElem>, Error>;
}

impl<T, InElem, S, SK> ConvFftExt<T, InElem, S, SK> for ArrayBase<S, Ix2>
where
    T: FftNum,
    InElem: GetProcessor<T, InElem> + NumAssign + Copy,
    S: Data<Elem = InElem>,
    SK: Data<Elem = InElem>,
{
    fn conv_fft(
        &self,
        filter: &ArrayBase<SK, Ix2>,
        conv: impl Into<FftConvolution>,
    ) -> Result<Array2<InElem>, Error> {
        let conv: FftConvolution = conv.into();
        conv.convolve(self, filter)
    }

    fn conv_fft_with_processor(
        &self,
        filter: &ArrayBase<SK, Ix2>,
        conv: impl Into<FftConvolution>,
        fft_processor: &mut impl Processor<T, InElem>,
    ) -> Result<Array2<InElem>, Error> {
        let conv: FftConvolution = conv.into();
        conv.convolve_with_processor(self, filter, fft_processor)
    }
}
