//! Model-layer integration: an observed game from first move to game over.

use std::cell::RefCell;
use std::rc::Rc;

use pursuit_engine::{
    BoardGraph, Detective, Event, GameSetup, GameState, Location, Model, Observer, Piece, Player,
    SingleMove, Ticket, TicketBook, Transport,
};

struct Spectator {
    seen: RefCell<Vec<(Event, usize)>>,
}

impl Spectator {
    fn new() -> Rc<Self> {
        Rc::new(Self {
            seen: RefCell::new(Vec::new()),
        })
    }
}

impl Observer for Spectator {
    fn on_model_changed(&self, state: &GameState, event: Event) {
        self.seen.borrow_mut().push((event, state.current_round()));
    }
}

fn loc(id: u16) -> Location {
    Location::new(id)
}

fn two_round_model() -> Model {
    let mut graph = BoardGraph::new();
    graph.add_edge(loc(1), loc(2), Transport::Taxi);
    graph.add_edge(loc(2), loc(3), Transport::Taxi);
    graph.add_edge(loc(3), loc(4), Transport::Taxi);
    graph.add_edge(loc(4), loc(5), Transport::Taxi);
    Model::new(
        GameSetup::new(vec![false, false], graph),
        Player::new(
            Piece::MrX,
            loc(1),
            TicketBook::empty().with(Ticket::Taxi, 5),
        ),
        vec![Player::new(
            Piece::Detective(Detective::Red),
            loc(5),
            TicketBook::empty().with(Ticket::Taxi, 5),
        )],
    )
}

fn step(mover: Piece, from: u16, to: u16) -> pursuit_engine::Move {
    SingleMove {
        mover,
        source: loc(from),
        ticket: Ticket::Taxi,
        destination: loc(to),
    }
    .into()
}

#[test]
fn observed_game_to_schedule_exhaustion() {
    let mut model = two_round_model();
    let spectator = Spectator::new();
    model.register_observer(spectator.clone());

    model.choose_move(&step(Piece::MrX, 1, 2));
    model.choose_move(&step(Piece::Detective(Detective::Red), 5, 4));
    model.choose_move(&step(Piece::MrX, 2, 3));

    // Two ordinary notifications, then the decisive one.
    assert_eq!(
        spectator.seen.borrow().as_slice(),
        &[
            (Event::MoveMade, 1),
            (Event::MoveMade, 2),
            (Event::GameOver, 2),
        ]
    );
    assert!(model.current_state().is_terminal());
    assert_eq!(
        model.current_state().winner(),
        &im::HashSet::unit(Piece::MrX)
    );
}

#[test]
fn capture_notifies_game_over() {
    let mut graph = BoardGraph::new();
    graph.add_edge(loc(1), loc(2), Transport::Taxi);
    graph.add_edge(loc(2), loc(3), Transport::Taxi);
    graph.add_edge(loc(3), loc(4), Transport::Taxi);
    let mut model = Model::new(
        GameSetup::new(vec![false; 10], graph),
        Player::new(
            Piece::MrX,
            loc(1),
            TicketBook::empty().with(Ticket::Taxi, 5),
        ),
        vec![Player::new(
            Piece::Detective(Detective::Red),
            loc(3),
            TicketBook::empty().with(Ticket::Taxi, 5),
        )],
    );
    let spectator = Spectator::new();
    model.register_observer(spectator.clone());

    model.choose_move(&step(Piece::MrX, 1, 2));
    model.choose_move(&step(Piece::Detective(Detective::Red), 3, 2));

    let last = *spectator.seen.borrow().last().unwrap();
    assert_eq!(last.0, Event::GameOver);
    assert_eq!(
        model.current_state().winner(),
        &im::HashSet::unit(Piece::Detective(Detective::Red))
    );
}

#[test]
fn all_observers_notified_in_registration_order() {
    let mut model = two_round_model();
    let first = Spectator::new();
    let second = Spectator::new();
    model.register_observer(first.clone());
    model.register_observer(second.clone());
    assert_eq!(model.observers().len(), 2);

    model.choose_move(&step(Piece::MrX, 1, 2));

    assert_eq!(first.seen.borrow().len(), 1);
    assert_eq!(second.seen.borrow().len(), 1);
}

#[test]
fn unregistered_observer_hears_nothing() {
    let mut model = two_round_model();
    let spectator = Spectator::new();
    let handle: Rc<dyn Observer> = spectator.clone();
    model.register_observer(handle.clone());
    model.unregister_observer(&handle);

    model.choose_move(&step(Piece::MrX, 1, 2));
    assert!(spectator.seen.borrow().is_empty());
}
