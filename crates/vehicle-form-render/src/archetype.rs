use vehicle_form_core::BodyKind;

/// Wheel center and tire radius in canvas units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wheel {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

/// Hand-authored outline templates for one body type.
///
/// `body` and `glass` are SVG path data whose numeric tokens alternate x, y by position; the
/// deformation engine relies on that ordering and copies everything else verbatim.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Archetype {
    pub kind: BodyKind,
    pub body: &'static str,
    pub glass: &'static str,
    pub wheel_a: Wheel,
    pub wheel_b: Wheel,
}

const WHEEL_A: Wheel = Wheel {
    cx: 270.0,
    cy: 360.0,
    r: 38.0,
};
const WHEEL_B: Wheel = Wheel {
    cx: 740.0,
    cy: 360.0,
    r: 38.0,
};

// The pickup cab sits forward of the bed, so its axles are closer together.
const TRUCK_WHEEL_A: Wheel = Wheel {
    cx: 250.0,
    cy: 360.0,
    r: 38.0,
};
const TRUCK_WHEEL_B: Wheel = Wheel {
    cx: 640.0,
    cy: 360.0,
    r: 38.0,
};

/// The archetype catalog, indexed in [`BodyKind::ALL`] order.
pub static ARCHETYPES: [Archetype; 5] = [
    Archetype {
        kind: BodyKind::Sedan,
        body: SEDAN_BODY,
        glass: SEDAN_GLASS,
        wheel_a: WHEEL_A,
        wheel_b: WHEEL_B,
    },
    Archetype {
        kind: BodyKind::Suv,
        body: SUV_BODY,
        glass: SUV_GLASS,
        wheel_a: WHEEL_A,
        wheel_b: WHEEL_B,
    },
    Archetype {
        kind: BodyKind::Truck,
        body: TRUCK_BODY,
        glass: TRUCK_GLASS,
        wheel_a: TRUCK_WHEEL_A,
        wheel_b: TRUCK_WHEEL_B,
    },
    Archetype {
        kind: BodyKind::Hatch,
        body: HATCH_BODY,
        glass: HATCH_GLASS,
        wheel_a: WHEEL_A,
        wheel_b: WHEEL_B,
    },
    Archetype {
        kind: BodyKind::Coupe,
        body: COUPE_BODY,
        glass: COUPE_GLASS,
        wheel_a: WHEEL_A,
        wheel_b: WHEEL_B,
    },
];

impl Archetype {
    pub fn for_kind(kind: BodyKind) -> &'static Archetype {
        let index = match kind {
            BodyKind::Sedan => 0,
            BodyKind::Suv => 1,
            BodyKind::Truck => 2,
            BodyKind::Hatch => 3,
            BodyKind::Coupe => 4,
        };
        &ARCHETYPES[index]
    }

    pub fn wheels(&self) -> [Wheel; 2] {
        [self.wheel_a, self.wheel_b]
    }

    pub fn wheelbase(&self) -> f64 {
        self.wheel_b.cx - self.wheel_a.cx
    }
}

/// Looks up an archetype by kind name. Unrecognized names get the sedan.
pub fn archetype_by_name(name: &str) -> &'static Archetype {
    Archetype::for_kind(BodyKind::from_name_or_default(name))
}

const SEDAN_BODY: &str = "M150 330
             C170 275 230 230 310 220
             L430 190
             C490 175 560 175 620 190
             L740 220
             C820 230 880 275 900 330
             L915 360
             C920 375 910 392 892 392
             H158
             C140 392 130 375 135 360
             Z";

const SEDAN_GLASS: &str = "M300 260
              C320 230 350 215 390 205
              L470 185
              C500 178 530 178 560 185
              L640 205
              C680 215 710 230 730 260
              L745 295
              H285
              Z";

const SUV_BODY: &str = "M140 330
             C160 268 225 220 320 210
             L460 192
             C510 185 570 185 620 192
             L760 210
             C855 220 920 268 940 330
             L958 362
             C966 377 956 394 936 394
             H144
             C124 394 114 377 122 362
             Z";

const SUV_GLASS: &str = "M290 262
              C310 224 350 205 410 198
              L485 190
              C510 187 540 187 565 190
              L650 198
              C710 205 750 224 770 262
              L780 296
              H280
              Z";

const TRUCK_BODY: &str = "M140 340
             C155 285 205 240 270 225
             L430 190
             C470 182 510 182 550 190
             L630 207
             C680 218 710 250 720 290
             L735 340
             H920
             C940 340 950 360 944 378
             C938 392 924 400 908 400
             H140
             C124 400 110 392 104 378
             C98 360 108 340 128 340
             Z";

const TRUCK_GLASS: &str = "M300 270
              C315 235 345 215 385 206
              L465 188
              C495 182 525 182 555 188
              L595 198
              C620 205 640 225 650 250
              L660 290
              H285
              Z";

const HATCH_BODY: &str = "M150 332
             C170 270 235 228 330 218
             L470 196
             C520 188 570 188 620 196
             L740 218
             C825 235 875 280 895 332
             L912 360
             C920 374 910 392 892 392
             H158
             C140 392 130 374 138 360
             Z";

const HATCH_GLASS: &str = "M310 266
              C330 228 370 210 430 202
              L500 192
              C520 190 540 190 560 192
              L645 202
              C700 210 735 228 755 266
              L768 296
              H295
              Z";

const COUPE_BODY: &str = "M160 334
             C190 270 260 230 350 218
             L470 194
             C520 184 570 184 620 194
             L730 218
             C800 235 850 275 875 334
             L892 360
             C902 374 892 392 874 392
             H166
             C148 392 138 374 148 360
             Z";

const COUPE_GLASS: &str = "M340 270
              C370 232 420 214 480 206
              L525 200
              C540 198 555 198 570 200
              L640 210
              C690 218 725 236 745 270
              L756 296
              H330
              Z";
