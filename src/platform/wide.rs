//! Reading variable-length UTF-16 strings out of OS calls.

/// Result of one attempt to fill a caller-provided buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WideFill {
    /// The call succeeded and wrote this many code units.
    Done(usize),
    /// The call wants a larger buffer.
    TooSmall,
    Failed,
}

/// Call `fill` with a buffer of `initial` units, doubling it (up to `max`)
/// while the call reports [`WideFill::TooSmall`].
pub fn read_growing_wide<F>(initial: usize, max: usize, mut fill: F) -> Option<String>
where
    F: FnMut(&mut [u16]) -> WideFill,
{
    let mut len = initial.max(1);
    loop {
        let mut buffer = vec![0u16; len];
        match fill(&mut buffer) {
            WideFill::Done(written) => {
                return Some(String::from_utf16_lossy(&buffer[..written.min(len)]));
            }
            WideFill::TooSmall if len < max => len = len.saturating_mul(2).min(max),
            WideFill::TooSmall | WideFill::Failed => return None,
        }
    }
}
