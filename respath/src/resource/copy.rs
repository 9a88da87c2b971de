//! Bounded stream copying.

use std::io::{self, ErrorKind, Read, Write};

/// Size of the buffer used by [`copy_resource`].
pub const COPY_BUFFER_SIZE: usize = 4096;

/// Copy everything from `input` to `output`, then close both.
///
/// Data moves through a fixed [`COPY_BUFFER_SIZE`] buffer, so memory use does
/// not depend on the size of the resource. Both handles are consumed and
/// dropped on every path. A failure to flush `output` at the end is logged as
/// a warning and does not fail the copy.
///
/// Returns the number of bytes copied.
///
/// # Errors
///
/// Returns the first read or write error raised during the copy.
///
/// # Examples
///
/// ```
/// use respath::copy_resource;
///
/// let mut output = Vec::new();
/// let copied = copy_resource(&b"pump"[..], &mut output).unwrap();
/// assert_eq!(copied, 4);
/// assert_eq!(output, b"pump");
/// ```
pub fn copy_resource<R: Read, W: Write>(mut input: R, mut output: W) -> io::Result<u64> {
    let mut buffer = [0u8; COPY_BUFFER_SIZE];
    let mut total: u64 = 0;

    let result = loop {
        let read = match input.read(&mut buffer) {
            Ok(0) => break Ok(total),
            Ok(read) => read,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => break Err(e),
        };
        if let Err(e) = output.write_all(&buffer[..read]) {
            break Err(e);
        }
        total += read as u64;
    };
    drop(input);

    if let Err(e) = output.flush() {
        log::warn!("Failed to close output after copying: {e}");
    }
    drop(output);

    result
}
