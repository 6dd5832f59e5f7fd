//! 2-D convolution through the FFT for [`ndarray`].
//!
//! The input and the filter are zero padded into a common working buffer,
//! multiplied in the frequency domain and transformed back. The padding is
//! sized so that the wrap-around of the cyclic convolution falls outside the
//! region that is finally extracted, which makes the result equal to the
//! linear convolution in either [`BorderMode`].
//!
//! ```rust
//! use ndarray::prelude::*;
//! use ndarray_spectral_conv::{BorderMode, ConvFftExt, FftConvolution};
//!
//! let input = Array2::<f64>::ones((3, 3));
//! let filter = Array2::<f64>::ones((2, 2));
//!
//! let valid = input.conv_fft(&filter, BorderMode::Valid).unwrap();
//! assert_eq!(valid.dim(), (2, 2));
//! assert!(valid.iter().all(|v| (v - 4.0).abs() < 1e-9));
//!
//! // an odd last axis can be padded to an even transform length
//! let full = input
//!     .conv_fft(&filter, FftConvolution::new(BorderMode::Full).with_pad_last_dim(true))
//!     .unwrap();
//! assert_eq!(full.dim(), (4, 4));
//! ```

mod conv;
mod conv_fft;
mod error;
mod padding;

pub use conv::ConvExt;
pub use conv_fft::{processor, ConvFftExt, FftConvolution};
pub use error::Error;

/// Which part of the linear convolution is returned.
///
/// For an `rows_in x cols_in` input and a `rows_f x cols_f` filter:
///
/// * `Valid`: `(rows_in - rows_f + 1) x (cols_in - cols_f + 1)`, only the positions
///   where the filter lies entirely inside the input. The filter must not be
///   larger than the input.
/// * `Full`: `(rows_in + rows_f - 1) x (cols_in + cols_f - 1)`, every position where
///   the two overlap at all. Any sizes are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderMode {
    Valid,
    #[default]
    Full,
}
