use crate::{BorderMode, Error};

use super::good_size;

/// Where the operands go in the working buffers and where the result is read
/// back from. All pairs are `(rows, cols)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SpectralLayout {
    /// Extent of both transform buffers.
    pub working: (usize, usize),
    /// Top-left corner of the input inside its buffer. The filter always
    /// sits at the origin.
    pub input_offset: (usize, usize),
    /// Top-left corner of the region of interest in the cyclic result.
    pub roi_start: (usize, usize),
    /// Extent of the region of interest, which is the output.
    pub output: (usize, usize),
}

impl BorderMode {
    /// Output extent of a convolution in this mode.
    pub(crate) fn output_dim(
        self,
        input: (usize, usize),
        filter: (usize, usize),
    ) -> Result<(usize, usize), Error> {
        if input.0 == 0 || input.1 == 0 || filter.0 == 0 || filter.1 == 0 {
            return Err(Error::EmptyOperand { input, filter });
        }

        match self {
            BorderMode::Valid => {
                if filter.0 > input.0 || filter.1 > input.1 {
                    return Err(Error::FilterLargerThanInput { input, filter });
                }
                Ok((input.0 - filter.0 + 1, input.1 - filter.1 + 1))
            }
            BorderMode::Full => {
                let rows = (input.0 - 1).checked_add(filter.0);
                let cols = (input.1 - 1).checked_add(filter.1);
                rows.zip(cols).ok_or(Error::SizeOverflow { input, filter })
            }
        }
    }

    /// Derives the padding and the extraction window together so that the
    /// wrap-around of the cyclic convolution never reaches the output.
    pub(crate) fn unfold(
        self,
        input: (usize, usize),
        filter: (usize, usize),
        pad_last_dim: bool,
        fast_len: bool,
    ) -> Result<SpectralLayout, Error> {
        let output = self.output_dim(input, filter)?;
        let overlap = (filter.0 - 1, filter.1 - 1);
        let overflow = || Error::SizeOverflow { input, filter };

        let (mut working, input_offset) = match self {
            BorderMode::Valid => (input, (0, 0)),
            BorderMode::Full => {
                // input + 2 * (filter - 1) on both axes
                let rows = overlap
                    .0
                    .checked_mul(2)
                    .and_then(|pad| pad.checked_add(input.0))
                    .ok_or_else(overflow)?;
                let cols = overlap
                    .1
                    .checked_mul(2)
                    .and_then(|pad| pad.checked_add(input.1))
                    .ok_or_else(overflow)?;
                ((rows, cols), overlap)
            }
        };

        if pad_last_dim {
            working.1 = working.1.checked_add(1).ok_or_else(overflow)?;
        }
        if fast_len {
            let rounded = good_size::compute(working);
            log::trace!("rounded working size {working:?} up to {rounded:?}");
            working = rounded;
        }

        Ok(SpectralLayout {
            working,
            input_offset,
            roi_start: overlap,
            output,
        })
    }
}
