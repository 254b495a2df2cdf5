//! Managed-heap byte buffer marshaling
//!
//! Copies host-side binary payloads into runtime-owned `ArrayBuffer`s.
//! Raw access to the backing bytes is bracketed: the mutable slice exists
//! only for the duration of the writer closure and cannot escape it, so
//! no raw pointer outlives the acquisition window.

use rquickjs::{ArrayBuffer, Ctx};

/// Allocate a `len`-byte buffer on the runtime heap and fill it in place.
///
/// Returns `None` if the runtime cannot allocate or the backing bytes
/// cannot be acquired; the caller drops the payload in that case. The
/// writer must fill exactly `len` bytes.
pub fn marshal_bytes<'js, F>(ctx: &Ctx<'js>, len: usize, write: F) -> Option<ArrayBuffer<'js>>
where
    F: FnOnce(&mut [u8]),
{
    let buffer = ArrayBuffer::new(ctx.clone(), vec![0u8; len]).ok()?;
    if len == 0 {
        // Nothing to acquire; an empty buffer has no backing bytes.
        write(&mut []);
        return Some(buffer);
    }
    {
        let raw = buffer.as_raw()?;
        // SAFETY: the buffer was just allocated and is not detached; the
        // handle keeps it alive, QuickJS does not relocate ArrayBuffer
        // storage, and no script runs while the slice exists.
        let bytes = unsafe { std::slice::from_raw_parts_mut(raw.ptr.as_ptr(), raw.len) };
        write(bytes);
    }
    Some(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::ScriptRuntime;

    #[test]
    fn written_bytes_round_trip() {
        let rt = ScriptRuntime::new().unwrap();
        rt.with(|ctx| {
            let payload = [0x01u8, 0x7f, 0x00, 0xff, 0x42];
            let buffer = marshal_bytes(&ctx, payload.len(), |bytes| {
                bytes.copy_from_slice(&payload);
            })
            .unwrap();
            assert_eq!(buffer.len(), payload.len());
            assert_eq!(buffer.as_bytes().unwrap(), &payload);
        });
    }

    #[test]
    fn zero_length_buffer_is_allowed() {
        let rt = ScriptRuntime::new().unwrap();
        rt.with(|ctx| {
            let buffer = marshal_bytes(&ctx, 0, |bytes| {
                assert!(bytes.is_empty());
            })
            .unwrap();
            assert_eq!(buffer.len(), 0);
        });
    }
}
