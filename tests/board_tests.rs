use seabattle::prelude::*;
use seabattle::LIVE_GLYPH;

const SAMPLE: [((i32, i32), (i32, i32)); 10] = [
    ((0, 0), (0, 0)),
    ((0, 2), (0, 2)),
    ((0, 4), (0, 4)),
    ((0, 6), (0, 6)),
    ((2, 0), (2, 1)),
    ((2, 3), (2, 4)),
    ((2, 6), (2, 7)),
    ((4, 0), (4, 2)),
    ((4, 4), (4, 6)),
    ((6, 0), (6, 3)),
];

fn board() -> Board {
    Board::new(SAMPLE).unwrap()
}

#[test]
fn test_sample_fleet_shots() {
    let mut board = board();
    assert_eq!(board.ships().len(), 10);
    assert_eq!(board.fire((0, 0)), ShotResult::Sunk);
    assert_eq!(board.fire((9, 9)), ShotResult::Miss);
    assert_eq!(board.fire((2, 0)), ShotResult::Hit);
    assert_eq!(board.fire((2, 1)), ShotResult::Sunk);
    assert_eq!(board.ships_afloat(), 8);
    assert!(!board.all_sunk());
}

#[test]
fn test_render_after_shots() {
    let mut board = board();
    board.fire((0, 0));
    board.fire((9, 9));
    board.fire((2, 0));
    assert_eq!(board.render().lines().nth(2), Some("* □ ~ □ □ ~ □ □ ~ ~"));
    board.fire((2, 1));

    let rendered = board.render();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "x ~ □ ~ □ ~ □ ~ ~ ~");
    assert_eq!(lines[1], "~ ~ ~ ~ ~ ~ ~ ~ ~ ~");
    assert_eq!(lines[2], "x x ~ □ □ ~ □ □ ~ ~");
    assert_eq!(lines[6], "□ □ □ □ ~ ~ ~ ~ ~ ~");
    assert_eq!(lines[9], "~ ~ ~ ~ ~ ~ ~ ~ ~ ~");
    assert_eq!(rendered, board.to_string());
}

#[test]
fn test_fresh_board_shows_every_cell() {
    let board = board();
    let live = board.render().chars().filter(|&c| c == LIVE_GLYPH).count();
    assert_eq!(live, 20);
    assert_eq!(board.occupied().count(), 20);
}

#[test]
fn test_miss_outside_board() {
    let mut board = board();
    assert_eq!(board.fire((-1, -1)), ShotResult::Miss);
    assert_eq!(board.fire((100, 3)), ShotResult::Miss);
    assert_eq!(board.fire((1, 1)), ShotResult::Miss);
    assert_eq!(board.ships_afloat(), 10);
}

#[test]
fn test_repeated_fire() {
    let mut board = board();
    assert_eq!(board.fire((2, 3)), ShotResult::Hit);
    assert_eq!(board.fire((2, 3)), ShotResult::Hit);
    assert_eq!(board.fire((2, 4)), ShotResult::Sunk);
    assert_eq!(board.fire((2, 3)), ShotResult::Sunk);
    assert_eq!(board.fire((2, 4)), ShotResult::Sunk);
    assert_eq!(board.fire((3, 3)), ShotResult::Miss);
    assert_eq!(board.fire((3, 3)), ShotResult::Miss);
}

#[test]
fn test_sink_whole_fleet() {
    let mut board = board();
    let targets: Vec<Coord> = board.occupied().collect();
    let mut sunk = 0;
    for target in targets {
        match board.fire(target) {
            ShotResult::Sunk => sunk += 1,
            ShotResult::Hit => {}
            ShotResult::Miss => panic!("occupied cell {} reported a miss", target),
        }
    }
    assert_eq!(sunk, 10);
    assert!(board.all_sunk());
    assert_eq!(board.ships_afloat(), 0);
    assert!(!board.render().contains(LIVE_GLYPH));
    assert!(!board.render().contains('*'));
}

#[test]
fn test_ship_at() {
    let mut board = board();
    let ship = board.ship_at((6, 2)).unwrap();
    assert_eq!(ship.id(), 9);
    assert_eq!(ship.start(), Coord::new(6, 0));
    assert_eq!(ship.end(), Coord::new(6, 3));
    assert!(board.ship_at((5, 2)).is_none());

    board.fire((6, 2));
    let cell = board.ship_at((6, 2)).unwrap().deck(Coord::new(6, 2)).unwrap();
    assert!(!cell.is_alive());
}

#[test]
fn test_fleet_off_the_grid() {
    // coordinates are not bounded; such ships are just never rendered
    let shifted = SAMPLE.map(|((r1, c1), (r2, c2))| ((r1 - 20, c1), (r2 - 20, c2)));
    let mut board = Board::new(shifted).unwrap();
    assert_eq!(board.fire((-20, 0)), ShotResult::Sunk);
    assert_eq!(board.fire((0, 0)), ShotResult::Miss);
    assert!(!board.render().contains(LIVE_GLYPH));
    assert!(!board.render().contains('x'));
}
