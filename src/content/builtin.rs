//! Content domain: the three levels that ship with the game.

use crate::content::LevelDef;

const LEVEL_1: &[&str] = &[
    "                                        ",
    "                                        ",
    "                                        ",
    "                                        ",
    "                                        ",
    "                                        ",
    "                                        ",
    "           XXXX                         ",
    "                                        ",
    "       P        XXX         XXX         ",
    "XXXXXXXXXXXX  XXXXXXXXX  XXXXXXXXXXXXXXXF",
];

const LEVEL_2: &[&str] = &[
    "                                        ",
    "                                        ",
    "                                        ",
    "                                        ",
    "              O                         ",
    "           XXXX          O              ",
    "                                        ",
    "       P        XXX         XXX         ",
    "XXXXXXXXXXXX  XXXXXXXXX  XXXXXXXXXXXXXXXF",
];

const LEVEL_3: &[&str] = &[
    "                                        ",
    "                                        ",
    "                           O            ",
    "                                        ",
    "           OXXXX           XXX           ",
    "       P        XXX   O    XXXXXXX       ",
    "XXXXXXXXXXXX  XXXXXXXXX  XXXXXXXXXXXXXXXF",
];

/// Used when no levels file is present.
pub fn builtin_levels() -> Vec<LevelDef> {
    [
        ("level_1", "Level 1", LEVEL_1),
        ("level_2", "Level 2", LEVEL_2),
        ("level_3", "Level 3", LEVEL_3),
    ]
    .into_iter()
    .map(|(id, name, rows)| LevelDef {
        id: id.to_string(),
        name: name.to_string(),
        rows: rows.iter().map(|row| row.to_string()).collect(),
    })
    .collect()
}
