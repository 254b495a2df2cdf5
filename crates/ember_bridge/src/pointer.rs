//! Pointer input packets
//!
//! The wire format is defined by the platform input layer; the bridge
//! treats a packet as an opaque byte blob of known length.

/// An immutable, binary-serializable pointer event payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerPacket {
    data: Box<[u8]>,
}

impl PointerPacket {
    pub fn new(data: impl Into<Box<[u8]>>) -> Self {
        Self { data: data.into() }
    }

    /// Exact serialized byte length.
    pub fn serialized_size(&self) -> usize {
        self.data.len()
    }

    /// Serialize into a destination of exactly `serialized_size()` bytes.
    ///
    /// A length mismatch is a contract violation between marshaler and
    /// packet, never a runtime condition; it must not silently truncate.
    pub fn serialize_into(&self, out: &mut [u8]) {
        assert_eq!(
            out.len(),
            self.data.len(),
            "pointer packet length mismatch"
        );
        out.copy_from_slice(&self.data);
    }
}
