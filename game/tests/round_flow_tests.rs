use game::highscores::MemoryScoreStore;
use game::session::{GameSession, PlayerInput};
use game::state::RoundTick;
use game::target::BoardBounds;
use game::view::GameView;

fn session() -> GameSession<MemoryScoreStore> {
    let mut s = GameSession::new(7, MemoryScoreStore::new());
    s.set_board_bounds(BoardBounds::new(800, 600));
    s
}

fn hit_live_target(s: &mut GameSession<MemoryScoreStore>) {
    let t = s.state().target().expect("live target");
    s.apply(PlayerInput::ClickBoard {
        x: t.x + t.diameter / 2,
        y: t.y + t.diameter / 2,
    });
}

#[test]
fn five_hits_in_a_thirty_second_round_land_on_the_scoreboard() {
    let mut s = session();
    s.apply(PlayerInput::Play);
    s.apply(PlayerInput::ChooseDuration(30));
    assert_eq!(s.state().view, GameView::Round);
    assert_eq!(s.state().clock_label(), "00:30");

    for _ in 0..5 {
        hit_live_target(&mut s);
    }
    assert_eq!(s.state().score(), 5);

    let mut finishes = 0;
    for _ in 0..30 {
        if let RoundTick::Finished { score } = s.tick() {
            assert_eq!(score, 5);
            finishes += 1;
        }
    }
    assert_eq!(finishes, 1);
    assert_eq!(s.state().view, GameView::NameEntry { score: 5 });

    s.apply(PlayerInput::SubmitName("  Rivka  ".to_string()));
    assert_eq!(s.state().view, GameView::HighScores);
    let board = s.scoreboard();
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].name, "Rivka");
    assert_eq!(board[0].score, 5);
}

#[test]
fn a_scoreless_round_goes_straight_to_the_table() {
    let mut s = session();
    s.apply(PlayerInput::Play);
    s.apply(PlayerInput::ChooseDuration(2));

    assert_eq!(s.tick(), RoundTick::Counting { remaining_secs: 1 });
    assert_eq!(s.tick(), RoundTick::Finished { score: 0 });
    assert_eq!(s.state().view, GameView::HighScores);
    assert!(s.scoreboard().is_empty());

    // The countdown is spent; further ticks are inert.
    assert_eq!(s.tick(), RoundTick::Idle);
}

#[test]
fn an_empty_name_is_recorded_as_anon() {
    let mut s = session();
    s.apply(PlayerInput::Play);
    s.apply(PlayerInput::ChooseDuration(1));
    hit_live_target(&mut s);
    s.tick();

    s.apply(PlayerInput::SubmitName("   ".to_string()));
    assert_eq!(s.scoreboard()[0].name, "Anon");
    assert_eq!(s.scoreboard()[0].score, 1);
}

#[test]
fn rounds_are_reentrant_through_the_score_table() {
    let mut s = session();
    s.apply(PlayerInput::Play);
    s.apply(PlayerInput::ChooseDuration(1));
    hit_live_target(&mut s);
    s.tick();
    s.apply(PlayerInput::SubmitName("one".to_string()));

    // Back to the start menu and around again with a new duration.
    s.apply(PlayerInput::Back);
    assert_eq!(s.state().view, GameView::StartMenu);
    s.apply(PlayerInput::Play);
    s.apply(PlayerInput::ChooseDuration(2));
    assert_eq!(s.state().clock_label(), "00:02");
    assert_eq!(s.state().score(), 0);

    hit_live_target(&mut s);
    hit_live_target(&mut s);
    s.tick();
    s.tick();
    s.apply(PlayerInput::SubmitName("two".to_string()));

    let board = s.scoreboard();
    assert_eq!(board.len(), 2);
    assert_eq!(board[0].name, "two");
    assert_eq!(board[1].name, "one");
}

#[test]
fn clearing_scores_empties_the_table() {
    let mut s = session();
    s.apply(PlayerInput::Play);
    s.apply(PlayerInput::ChooseDuration(1));
    hit_live_target(&mut s);
    s.tick();
    s.apply(PlayerInput::SubmitName("p".to_string()));
    assert_eq!(s.scoreboard().len(), 1);

    s.apply(PlayerInput::ClearScores);
    assert_eq!(s.state().view, GameView::HighScores);
    assert!(s.scoreboard().is_empty());
}

#[test]
fn a_failing_store_never_interrupts_play() {
    let mut store = MemoryScoreStore::new();
    store.fail_writes = true;
    let mut s = GameSession::new(5, store);
    s.set_board_bounds(BoardBounds::new(800, 600));

    s.apply(PlayerInput::Play);
    s.apply(PlayerInput::ChooseDuration(1));
    hit_live_target(&mut s);
    s.tick();
    s.apply(PlayerInput::SubmitName("p".to_string()));

    // The submit was swallowed by the failing store but the session kept
    // going, with the fresh entry still visible in-memory.
    assert_eq!(s.state().view, GameView::HighScores);
    assert_eq!(s.scoreboard().len(), 1);
    assert_eq!(s.scoreboard()[0].score, 1);

    s.apply(PlayerInput::ClearScores);
    s.apply(PlayerInput::Back);
    assert_eq!(s.state().view, GameView::StartMenu);
}

#[test]
fn clicks_and_inputs_outside_a_round_do_nothing() {
    let mut s = session();
    s.apply(PlayerInput::ClickBoard { x: 10, y: 10 });
    s.apply(PlayerInput::SubmitName("ghost".to_string()));
    s.apply(PlayerInput::SkipSave);
    assert_eq!(s.state().view, GameView::StartMenu);
    assert_eq!(s.state().score(), 0);
    assert!(s.scoreboard().is_empty());
}
