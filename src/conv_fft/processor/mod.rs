//! Provides 2-D FFT processor implementations for convolution operations.
//!
//! This module contains traits and implementations for performing forward and backward FFT transforms
//! on real and complex-valued matrices. These processors are used internally by the FFT-accelerated
//! convolution and can be reused across calls to keep their FFT plans warm.

use std::marker::PhantomData;

use ndarray::Array2;
use num::{Complex, Zero};
use rustfft::FftNum;

use crate::{padding::try_zeros, Error};

pub mod complex;
pub mod real;

/// Marker trait for the real element types the real processor accepts.
///
/// Only floating-point types are supported; rounding in integer FFTs makes the
/// cyclic convolution unusable.
pub trait ConvFftNum: FftNum {}

macro_rules! impl_conv_fft_num {
    ($($t:ty),*) => {
        $(impl ConvFftNum for $t {})*
    };
}

impl_conv_fft_num!(f32, f64);

/// Returns a processor instance for the given input element type.
///
/// This function is a convenience wrapper around `GetProcessor::get_processor()`.
///
/// # Type Parameters
///
/// * `T`: The FFT numeric type (f32 or f64)
/// * `InElem`: The input element type (`T` for real, `Complex<T>` for complex)
///
/// # Example
///
/// ```rust
/// use ndarray::prelude::*;
/// use ndarray_spectral_conv::{processor, BorderMode, FftConvolution};
///
/// let mut proc = processor::get::<f64, f64>();
/// let conv = FftConvolution::new(BorderMode::Valid);
///
/// // plans are cached inside `proc` between the two calls
/// let a = conv
///     .convolve_with_processor(&Array2::<f64>::ones((8, 8)), &Array2::ones((3, 3)), &mut proc)
///     .unwrap();
/// let b = conv
///     .convolve_with_processor(&Array2::<f64>::ones((8, 8)), &Array2::ones((2, 2)), &mut proc)
///     .unwrap();
/// assert_eq!(a.dim(), (6, 6));
/// assert_eq!(b.dim(), (7, 7));
/// ```
pub fn get<T: FftNum, InElem: GetProcessor<T, InElem>>() -> impl Processor<T, InElem> {
    InElem::get_processor()
}

/// Trait for FFT processors that can perform forward and backward 2-D transforms.
///
/// The spectrum produced by `forward` is stored transposed: the last (contiguous)
/// axis is transformed first and becomes the leading axis of the result. Two
/// spectra obtained from equally sized inputs share the same layout and can be
/// multiplied element-wise; `backward` restores the spatial layout.
pub trait Processor<T: FftNum, InElem: GetProcessor<T, InElem>> {
    /// Performs a forward FFT transform.
    ///
    /// `input` must be in standard layout and may be used as scratch space.
    fn forward(&mut self, input: &mut Array2<InElem>) -> Result<Array2<Complex<T>>, Error>;

    /// Performs a backward (inverse) FFT transform, normalised by the number of
    /// elements.
    ///
    /// `input` must come from `forward` on this processor (possibly after an
    /// element-wise product with another spectrum of the same shape) and is
    /// overwritten.
    fn backward(&mut self, input: &mut Array2<Complex<T>>) -> Result<Array2<InElem>, Error>;
}

/// Trait for types that can provide a processor instance.
///
/// This trait is implemented for real and complex numeric types, allowing them to
/// automatically select the appropriate FFT processor implementation.
pub trait GetProcessor<T: FftNum, InElem>
where
    InElem: GetProcessor<T, InElem>,
{
    /// Returns a processor instance appropriate for this type.
    fn get_processor() -> impl Processor<T, InElem>;
}

impl<T: ConvFftNum> GetProcessor<T, T> for T {
    fn get_processor() -> impl Processor<T, T> {
        real::Processor::<T>::default()
    }
}

impl<T: FftNum> GetProcessor<T, Complex<T>> for Complex<T> {
    fn get_processor() -> impl Processor<T, Complex<T>> {
        complex::Processor::<T>::default()
    }
}

fn contiguous<A>(array: &mut Array2<A>) -> Result<&mut [A], Error> {
    array.as_slice_mut().ok_or(Error::NonContiguous)
}

/// Copies `array` into a new standard layout buffer with its axes swapped.
fn transposed<A: Copy + Zero>(array: &Array2<A>) -> Result<Array2<A>, Error> {
    let (rows, cols) = array.dim();
    let mut buffer = try_zeros((cols, rows))?;
    buffer.assign(&array.t());
    Ok(buffer)
}

/// Runs `fft` over every contiguous row of `array` in place.
fn process_rows<T: FftNum>(
    planner: &mut rustfft::FftPlanner<T>,
    direction: rustfft::FftDirection,
    array: &mut Array2<Complex<T>>,
) -> Result<(), Error> {
    let (rows, cols) = array.dim();
    log::trace!("{direction:?} complex fft of length {cols} over {rows} rows");
    let fft = planner.plan_fft(cols, direction);

    let mut scratch = vec![Complex::zero(); fft.get_inplace_scratch_len()];
    // rustfft treats the buffer as consecutive chunks of `fft.len()`
    fft.process_with_scratch(contiguous(array)?, &mut scratch);
    Ok(())
}

fn normalize<T: FftNum, A>(array: &mut Array2<A>) -> Result<(), Error>
where
    A: Copy + std::ops::Div<T, Output = A>,
{
    let len = array.len();
    let len = T::from_usize(len).ok_or(Error::UnrepresentableLength(len))?;
    array.map_inplace(|x| *x = *x / len);
    Ok(())
}
