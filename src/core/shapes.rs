//! Shape table - static tetromino geometry
//!
//! Every kind carries a flat 16-entry offset table: 4 rotation states of
//! 4 cells each, with the states starting at indices 0, 4, 8 and 12.
//! A rotation advances by [`ROTATION_STEP`] and wraps at 16, which is the
//! `(r + 4) % 16` rule the rest of the core relies on.

/// Offset of a single cell relative to the piece anchor.
pub type CellOffset = (i8, i8);

/// Number of distinct tetromino kinds.
pub const SHAPE_COUNT: usize = 7;

/// Number of rotation states per kind.
pub const ROTATION_STATES: u8 = 4;

/// Distance between consecutive rotation states in the offset table.
pub const ROTATION_STEP: u8 = 4;

/// Length of one kind's flat offset table.
pub const TABLE_LEN: u8 = ROTATION_STATES * ROTATION_STEP;

/// The seven tetromino kinds, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    L,
    J,
    T,
    O,
    S,
    Z,
}

impl ShapeKind {
    /// All kinds in table order.
    pub const ALL: [ShapeKind; SHAPE_COUNT] = [
        ShapeKind::I,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::T,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::Z,
    ];

    /// Index into the shape table.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Kind for a table index, wrapping out-of-range values.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % SHAPE_COUNT]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "I",
            ShapeKind::L => "L",
            ShapeKind::J => "J",
            ShapeKind::T => "T",
            ShapeKind::O => "O",
            ShapeKind::S => "S",
            ShapeKind::Z => "Z",
        }
    }
}

/// Flat per-kind offset tables, 4 rotation states x 4 cells.
const OFFSETS: [[CellOffset; TABLE_LEN as usize]; SHAPE_COUNT] = [
    // I
    [
        (0, 1), (1, 1), (2, 1), (3, 1),
        (2, 0), (2, 1), (2, 2), (2, 3),
        (0, 2), (1, 2), (2, 2), (3, 2),
        (1, 0), (1, 1), (1, 2), (1, 3),
    ],
    // L
    [
        (2, 0), (0, 1), (1, 1), (2, 1),
        (1, 0), (1, 1), (1, 2), (2, 2),
        (0, 1), (1, 1), (2, 1), (0, 2),
        (0, 0), (1, 0), (1, 1), (1, 2),
    ],
    // J
    [
        (0, 0), (0, 1), (1, 1), (2, 1),
        (1, 0), (2, 0), (1, 1), (1, 2),
        (0, 1), (1, 1), (2, 1), (2, 2),
        (1, 0), (1, 1), (0, 2), (1, 2),
    ],
    // T
    [
        (1, 0), (0, 1), (1, 1), (2, 1),
        (1, 0), (1, 1), (2, 1), (1, 2),
        (0, 1), (1, 1), (2, 1), (1, 2),
        (1, 0), (0, 1), (1, 1), (1, 2),
    ],
    // O
    [
        (1, 0), (2, 0), (1, 1), (2, 1),
        (1, 0), (2, 0), (1, 1), (2, 1),
        (1, 0), (2, 0), (1, 1), (2, 1),
        (1, 0), (2, 0), (1, 1), (2, 1),
    ],
    // S
    [
        (1, 0), (2, 0), (0, 1), (1, 1),
        (1, 0), (1, 1), (2, 1), (2, 2),
        (1, 1), (2, 1), (0, 2), (1, 2),
        (0, 0), (0, 1), (1, 1), (1, 2),
    ],
    // Z
    [
        (0, 0), (1, 0), (1, 1), (2, 1),
        (2, 0), (1, 1), (2, 1), (1, 2),
        (0, 1), (1, 1), (1, 2), (2, 2),
        (1, 0), (0, 1), (1, 1), (0, 2),
    ],
];

/// The 4 cell offsets for a kind at a rotation table index (0, 4, 8 or 12).
pub fn cells(kind: ShapeKind, rotation: u8) -> [CellOffset; 4] {
    let start = (rotation % TABLE_LEN) as usize;
    let table = &OFFSETS[kind.index()];
    [
        table[start],
        table[start + 1],
        table[start + 2],
        table[start + 3],
    ]
}

/// Next rotation table index after one rotate step.
pub fn next_rotation(rotation: u8) -> u8 {
    (rotation + ROTATION_STEP) % TABLE_LEN
}
