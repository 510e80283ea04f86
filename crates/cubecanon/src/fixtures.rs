//! Shared layouts for unit tests (internal sticker order, ASCII colour codes).

use crate::state::CubeState;

/// A shuffled, unreachable but well-formed layout with no self-symmetry.
pub const SCRAMBLED: &str = "YWGORYOBORYOBGWYYWOBRYOBWGBRYRRGWWWOYBRGGORYWBGRGGWBOB";
/// `SCRAMBLED` with `R` and `O` swapped everywhere.
pub const SCRAMBLED_SWAPPED: &str = "YWGROYRBROYRBGWYYWRBOYRBWGBOYOOGWWWRYBOGGROYWBGOGGWBRB";
pub const SCRAMBLED_CANONICAL: &str =
    "112345126363166354462263514451265445234262551521613334";

/// Every face alternates its own colour with the opposite face's colour.
pub const CHECKERBOARD: &str = "GRGRGRGRGOBOBOBOBOBOBOBOBOBRGRGRGRGRWYWYWYWYWYWYWYWYWY";
pub const CHECKERBOARD_CANONICAL: &str =
    "121212121343434343434343434212121212565656565656565656";

pub const SOLVED_CANONICAL: &str = "111111111222222222333333333444444444555555555666666666";

/// Net text of `SCRAMBLED`.
pub const SCRAMBLED_NET: &str = "\
Y B R
G G O
R Y W
R Y O Y W G O B R R Y R
B G W O R Y Y O B R G W
Y Y W O B O W G B W W O
B G R
G G W
B O B
";

/// Net text of `SCRAMBLED_SWAPPED`.
pub const SCRAMBLED_SWAPPED_NET: &str = "\
Y B O
G G R
O Y W
O Y R Y W G R B O O Y O
B G W R O Y Y R B O G W
Y Y W R B R W G B W W R
B G O
G G W
B R B
";

pub fn state(stickers: &str) -> CubeState {
    CubeState::from_stickers(stickers.as_bytes()).expect("fixture is well-formed")
}
