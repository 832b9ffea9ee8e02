mod rigid_body;
mod color;

pub use self::rigid_body::RigidBody;
pub use self::color::RgbColor;

/// An opaque classification value attached to a body by the caller.
///
/// The engine stores it and compares it, nothing more. Game code usually
/// keeps its own enum and converts to and from this identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyTag(pub u64);

impl From<u64> for BodyTag {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Flags for controlling body behavior
pub mod body_flags {
    use bitflags::bitflags;

    bitflags! {
        /// State bits of a rigid body
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct BodyFlags: u32 {
            /// Body has been flagged for removal at the end of the current tick
            const REMOVED = 0x01;

            /// Body has made contact through a collision binding
            const IN_COLLISION = 0x02;
        }
    }
}
