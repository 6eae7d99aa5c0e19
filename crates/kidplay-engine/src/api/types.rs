/// Unique identifier for an interactive target within a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetId(pub u32);

/// Opaque identifier for a sticker in the shell's sticker book.
/// The engine never reads sticker state; it only announces unlocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StickerId(pub &'static str);

/// An event emitted by the engine for the surrounding shell to consume.
/// The shell drains these each frame and reacts (sticker book, HUD).
#[derive(Debug, Clone, PartialEq)]
pub enum ShellEvent {
    /// A session was completed; unlock the given sticker.
    /// Emitted at most once per session.
    StickerUnlocked(StickerId),
    /// The game's score changed (ball-toss HUD).
    ScoreChanged(u32),
}
