use super::*;
use crate::util::catalog::GAMES;

#[test]
fn game_href_uses_id() {
    assert_eq!(game_href(&GAMES[2]), "/games/3");
}

#[test]
fn rating_label_keeps_one_decimal() {
    assert_eq!(rating_label(4.8), "4.8");
    assert_eq!(rating_label(5.0), "5.0");
}
