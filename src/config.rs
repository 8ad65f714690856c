/// Immutable synthesis settings shared by the pipeline stages.
///
/// The stages take this by reference instead of consulting process-wide
/// argument state, so spelling and crossfade behavior can be exercised
/// without a CLI invocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SynthesisConfig {
    /// Spell the phrase letter by letter instead of pronouncing words.
    pub spell: bool,
    /// Blend adjacent units over a 10 ms window instead of butting them.
    pub crossfade: bool,
    /// Output gain in percent, already clamped to `0..=100`.
    /// `None` leaves the signal at recorded amplitude.
    pub volume: Option<u8>,
}
