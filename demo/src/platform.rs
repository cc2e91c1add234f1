use wake::{FixedPoint, Keys, Mixer, Sprite};

/// Everything the scene needs from whatever is running it.
pub trait Platform {
    type Sprite: Sprite;
    type Mixer: Mixer;

    fn create_sprite(&mut self, position: FixedPoint) -> Self::Sprite;

    /// Keys held right now.
    fn keypad(&mut self) -> Keys;

    fn mixer(&mut self) -> &mut Self::Mixer;

    fn draw_text(&mut self, center: FixedPoint, text: &str);

    /// Finish the frame. Returns `false` once the platform wants to stop.
    fn end_frame(&mut self) -> bool;
}
