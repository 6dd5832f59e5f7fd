//! Error type shared by the direct and the FFT convolution paths.

use std::collections::TryReserveError;

/// Errors returned by the convolution operations and the FFT processors.
///
/// Operand extents are reported as `(rows, cols)`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(
        "valid convolution needs a filter no larger than the input, \
         got filter {filter:?} for input {input:?}"
    )]
    FilterLargerThanInput {
        input: (usize, usize),
        filter: (usize, usize),
    },

    #[error("cannot convolve an empty operand (input {input:?}, filter {filter:?})")]
    EmptyOperand {
        input: (usize, usize),
        filter: (usize, usize),
    },

    #[error("working size overflows usize (input {input:?}, filter {filter:?})")]
    SizeOverflow {
        input: (usize, usize),
        filter: (usize, usize),
    },

    #[error("a {rows}x{cols} working buffer does not fit in memory")]
    BufferTooLarge { rows: usize, cols: usize },

    #[error("failed to allocate a {rows}x{cols} working buffer")]
    Allocation {
        rows: usize,
        cols: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("cannot transform an empty {rows}x{cols} buffer")]
    EmptyBuffer { rows: usize, cols: usize },

    #[error("FFT buffers must be contiguous in standard layout")]
    NonContiguous,

    #[error("spectrum of shape {actual:?} does not match the last forward transform {expected:?}")]
    SpectrumShape {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("transform length {0} is not representable in the element type")]
    UnrepresentableLength(usize),

    #[error(transparent)]
    Fft(#[from] realfft::FftError),

    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),
}
