//! Direct (spatial-domain) 2-D convolution.
//!
//! Slides the flipped kernel over the input and takes a dot product at every
//! position. It works for any numeric element type, integers included, and is
//! the baseline the FFT path is checked against.

use ndarray::{s, Array2, ArrayBase, Data, Ix2, Zip};
use num::traits::NumAssign;

use crate::{padding, BorderMode, Error};

#[cfg(test)]
mod tests;

pub trait ConvExt<T: NumAssign + Copy, SK: Data<Elem = T>> {
    /// Convolves `self` with `kernel` in the spatial domain.
    ///
    /// Output shapes and preconditions are the same as for
    /// [`FftConvolution`](crate::FftConvolution).
    fn conv(
        &self,
        kernel: &ArrayBase<SK, Ix2>,
        border_mode: BorderMode,
    ) -> Result<Array2<T>, Error>;
}

impl<T, S, SK> ConvExt<T, SK> for ArrayBase<S, Ix2>
where
    T: NumAssign + Copy,
    S: Data<Elem = T>,
    SK: Data<Elem = T>,
{
    fn conv(
        &self,
        kernel: &ArrayBase<SK, Ix2>,
        border_mode: BorderMode,
    ) -> Result<Array2<T>, Error> {
        // full mode sees the input surrounded by kernel - 1 zeros on every side
        let layout = border_mode.unfold(self.dim(), kernel.dim(), false, false)?;
        let pds = padding::zero_extend(self, layout.working, layout.input_offset)?;

        let flipped = kernel.slice(s![..;-1, ..;-1]);

        let mut ret = padding::try_zeros(layout.output)?;
        Zip::from(&mut ret)
            .and(pds.windows(kernel.raw_dim()))
            .for_each(|r, window| {
                *r = window
                    .iter()
                    .zip(flipped.iter())
                    .fold(T::zero(), |acc, (&x, &k)| acc + x * k);
            });

        Ok(ret)
    }
}
