//! Game-over animation: an alternating red and white checkerboard.

use gridgame_core::{Backend, GridGui};

use crate::types::{ColorName, GridPos, Result};

#[derive(Debug, Clone)]
pub struct GameOverBlink {
    selector: u16,
    ticks_per_phase: u32,
}

impl GameOverBlink {
    /// Every phase holds for at least one tick, so quit keeps being polled.
    pub fn new(ticks_per_phase: u32) -> Self {
        Self {
            selector: 0,
            ticks_per_phase: ticks_per_phase.max(1),
        }
    }

    /// Which parity of `i + j` is painted red in the next phase.
    pub fn selector(&self) -> u16 {
        self.selector
    }

    /// Draw one phase, flip the pattern and hold it for `ticks_per_phase`
    /// ticks. Stops holding early if quit arrives.
    pub fn phase<B: Backend>(&mut self, gui: &mut GridGui<B>) -> Result<()> {
        let size = gui.dimensions();
        for i in 0..size.width {
            for j in 0..size.height {
                let color = if (i as u32 + j as u32) % 2 == self.selector as u32 {
                    ColorName::Red
                } else {
                    ColorName::White
                };
                gui.color_square(GridPos::new(i, j), color)?;
            }
        }
        self.selector = 1 - self.selector;

        for _ in 0..self.ticks_per_phase {
            gui.tick()?;
            if gui.quit_requested() {
                break;
            }
        }
        Ok(())
    }

    /// Blank the board, then blink until quit is requested.
    pub fn run<B: Backend>(&mut self, gui: &mut GridGui<B>) -> Result<()> {
        gui.fill(ColorName::White)?;
        while !gui.quit_requested() {
            self.phase(gui)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridgame_core::HeadlessBackend;
    use crate::types::Rgb;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[test]
    fn phases_alternate_the_checkerboard() {
        let mut g = GridGui::new((4, 3), (2, 1), HeadlessBackend::new()).unwrap();
        let mut blink = GameOverBlink::new(5);

        blink.phase(&mut g).unwrap();
        assert_eq!(g.surface().get(0, 0), Some(RED));
        assert_eq!(g.surface().get(2, 0), Some(WHITE));
        assert_eq!(g.surface().get(2, 1), Some(RED));
        assert_eq!(blink.selector(), 1);
        assert_eq!(g.backend().slept().len(), 5);

        blink.phase(&mut g).unwrap();
        assert_eq!(g.surface().get(0, 0), Some(WHITE));
        assert_eq!(g.surface().get(2, 0), Some(RED));
        assert_eq!(g.backend().slept().len(), 10);
    }

    #[test]
    fn zero_ticks_per_phase_still_ticks_once() {
        let mut g = GridGui::new((2, 2), (1, 1), HeadlessBackend::new()).unwrap();
        let mut blink = GameOverBlink::new(0);
        blink.phase(&mut g).unwrap();
        blink.phase(&mut g).unwrap();
        assert_eq!(g.backend().slept().len(), 2);
    }

    #[test]
    fn quit_cuts_a_phase_short() {
        let mut g = GridGui::new((2, 2), (1, 1), HeadlessBackend::new()).unwrap();
        g.backend_mut().quit();
        GameOverBlink::new(5).phase(&mut g).unwrap();
        assert_eq!(g.backend().slept().len(), 1);
    }
}
