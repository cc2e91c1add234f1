use crate::fixed::{Fixed, FixedPoint};
use crate::host::Sprite;
use crate::input::{Button, FrameInput};
use crate::updater::Updatable;

/// One pixel per frame, the engine's usual walking speed.
pub const DEFAULT_STEP: Fixed = Fixed::ONE;

/// A sprite that walks in whichever directions are held.
///
/// Each direction is checked on its own, so holding two at once walks
/// diagonally and holding opposite directions cancels out.
#[derive(Debug, Clone)]
pub struct Walker<S: Sprite> {
    sprite: S,
    step_size: Fixed,
}

impl<S: Sprite> Walker<S> {
    pub fn new(sprite: S, step_size: Fixed) -> Self {
        Self { sprite, step_size }
    }

    pub fn position(&self) -> FixedPoint {
        self.sprite.position()
    }

    pub fn step_size(&self) -> Fixed {
        self.step_size
    }

    pub fn sprite(&self) -> &S {
        &self.sprite
    }

    pub fn sprite_mut(&mut self) -> &mut S {
        &mut self.sprite
    }
}

impl<S: Sprite> Updatable for Walker<S> {
    fn update(&mut self, input: &FrameInput) {
        if input.is_held(Button::Left) {
            self.sprite.set_x(self.sprite.x() - self.step_size);
        }
        if input.is_held(Button::Right) {
            self.sprite.set_x(self.sprite.x() + self.step_size);
        }
        if input.is_held(Button::Up) {
            self.sprite.set_y(self.sprite.y() - self.step_size);
        }
        if input.is_held(Button::Down) {
            self.sprite.set_y(self.sprite.y() + self.step_size);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;

    use crate::host::VirtualSprite;
    use crate::input::Keys;
    use crate::text::{text_bounds, SpriteFont};
    use crate::updater::Updater;
    use crate::geometry::point_in_rect;

    fn walker_at(x: i32, y: i32, step: Fixed) -> Walker<VirtualSprite> {
        Walker::new(VirtualSprite::new(FixedPoint::from_ints(x, y)), step)
    }

    fn held(keys: Keys) -> FrameInput {
        FrameInput::from_keys(keys, Keys::empty())
    }

    #[test]
    fn test_each_direction() {
        let mut walker = walker_at(0, 0, DEFAULT_STEP);
        walker.update(&held(Keys::LEFT));
        assert_eq!(walker.position(), FixedPoint::from_ints(-1, 0));
        walker.update(&held(Keys::DOWN));
        assert_eq!(walker.position(), FixedPoint::from_ints(-1, 1));
        walker.update(&held(Keys::RIGHT));
        walker.update(&held(Keys::UP));
        assert_eq!(walker.position(), FixedPoint::ZERO);
    }

    #[test]
    fn test_diagonal_and_opposites() {
        let mut walker = walker_at(10, 10, Fixed::from_int(2));
        walker.update(&held(Keys::RIGHT | Keys::DOWN));
        assert_eq!(walker.position(), FixedPoint::from_ints(12, 12));
        walker.update(&held(Keys::LEFT | Keys::RIGHT));
        assert_eq!(walker.position(), FixedPoint::from_ints(12, 12));
    }

    #[test]
    fn test_ignores_other_buttons() {
        let mut walker = walker_at(5, 5, Fixed::ONE);
        walker.update(&held(Keys::A | Keys::START));
        assert_eq!(walker.position(), FixedPoint::from_ints(5, 5));
    }

    #[test]
    fn test_sub_pixel_step() {
        let mut walker = walker_at(0, 0, Fixed::from_data(128));
        walker.update(&held(Keys::RIGHT));
        walker.update(&held(Keys::RIGHT));
        assert_eq!(walker.position(), FixedPoint::from_ints(1, 0));
    }

    #[test]
    fn test_walker_at_center_of_its_text() {
        let widths = [7u8; 26];
        let font = SpriteFont::new(&widths, 16);
        let walker = RefCell::new(walker_at(0, 40, DEFAULT_STEP));
        let mut updater: Updater<'_, 1> = Updater::new();
        updater.add(&walker).unwrap();
        updater.update(&FrameInput::new());

        let position = walker.borrow().position();
        let bounds = text_bounds(FixedPoint::from_ints(0, 40), "5", &font, 16).unwrap();
        assert!(point_in_rect(position, &bounds));
    }

    #[test]
    fn test_walks_out_of_text_bounds() {
        let widths = [8u8; 26];
        let font = SpriteFont::new(&widths, 16);
        let bounds = text_bounds(FixedPoint::from_ints(0, 40), "5", &font, 16).unwrap();

        let mut walker = walker_at(0, 40, Fixed::ONE);
        for _ in 0..4 {
            walker.update(&held(Keys::RIGHT));
        }
        assert!(point_in_rect(walker.position(), &bounds));
        walker.update(&held(Keys::RIGHT));
        assert!(!point_in_rect(walker.position(), &bounds));
    }
}
