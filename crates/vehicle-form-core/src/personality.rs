use crate::prng::{Mulberry32, lerp};
use crate::Seed;
use serde::{Deserialize, Serialize};

pub const STANCE_RANGE: (f64, f64) = (0.92, 1.06);
pub const ROOF_RANGE: (f64, f64) = (0.92, 1.08);
pub const NOSE_RANGE: (f64, f64) = (0.90, 1.10);
pub const TAIL_RANGE: (f64, f64) = (0.90, 1.10);
pub const BELT_RANGE: (f64, f64) = (0.92, 1.06);
pub const INK_RANGE: (f64, f64) = (0.72, 0.88);

/// Seeded multipliers that give each identity its own subtle proportions.
///
/// - `stance`: wheelbase feel (horizontal spread around the body center)
/// - `roof`: roof height
/// - `nose` / `tail`: front and rear overhang length
/// - `belt`: beltline contour
/// - `ink`: stroke intensity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Personality {
    pub stance: f64,
    pub roof: f64,
    pub nose: f64,
    pub tail: f64,
    pub belt: f64,
    pub ink: f64,
}

impl Personality {
    /// Consumes exactly six draws, in field order.
    pub fn draw(rng: &mut Mulberry32) -> Self {
        let mut next = |(lo, hi): (f64, f64)| lerp(lo, hi, rng.next_f64());
        let stance = next(STANCE_RANGE);
        let roof = next(ROOF_RANGE);
        let nose = next(NOSE_RANGE);
        let tail = next(TAIL_RANGE);
        let belt = next(BELT_RANGE);
        let ink = next(INK_RANGE);
        Self {
            stance,
            roof,
            nose,
            tail,
            belt,
            ink,
        }
    }

    pub fn from_seed(seed: Seed) -> Self {
        Self::draw(&mut Mulberry32::from_seed(seed))
    }

    /// Multipliers that leave every coordinate where the template put it.
    pub fn neutral() -> Self {
        Self {
            stance: 1.0,
            roof: 1.0,
            nose: 1.0,
            tail: 1.0,
            belt: 1.0,
            ink: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_1337_personality_is_pinned() {
        let p = Personality::from_seed(Seed::new(1337));
        assert_eq!(
            p,
            Personality {
                stance: 0.945817656563595,
                roof: 0.9503982802107931,
                nose: 1.0620943984482438,
                tail: 1.028749764431268,
                belt: 0.9803084461856634,
                ink: 0.7809673435240984,
            }
        );
    }

    #[test]
    fn draw_consumes_six_values() {
        let mut a = Mulberry32::new(2024);
        let _ = Personality::draw(&mut a);

        let mut b = Mulberry32::new(2024);
        for _ in 0..6 {
            b.next_f64();
        }
        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn parameters_stay_within_ranges() {
        for seed in (1..5_000u32).step_by(37) {
            let p = Personality::from_seed(Seed::new(seed));
            for (v, (lo, hi)) in [
                (p.stance, STANCE_RANGE),
                (p.roof, ROOF_RANGE),
                (p.nose, NOSE_RANGE),
                (p.tail, TAIL_RANGE),
                (p.belt, BELT_RANGE),
                (p.ink, INK_RANGE),
            ] {
                assert!(v >= lo && v <= hi, "seed {seed}: {v} not in [{lo}, {hi}]");
            }
        }
    }
}
