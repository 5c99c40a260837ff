use std::collections::HashMap;

use aoc_workbench::{
    utils::{
        self,
        grid::{self, DirLabel, Direction, Point},
        queue::{self, Queue},
        seq,
    },
    Error,
};
use tempfile::TempDir;

#[test]
fn queue_is_fifo_with_capacity() {
    let mut queue = Queue::with_capacity(2);
    assert_eq!(queue.capacity(), Some(2));
    queue.enqueue(1).unwrap();
    queue.enqueue(2).unwrap();
    assert!(matches!(queue.enqueue(3), Err(Error::QueueFull(2))));
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.state().copied().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(queue.dequeue(), Some(1));
    assert_eq!(queue.dequeue(), Some(2));
    assert_eq!(queue.dequeue(), None);
    assert!(queue.is_empty());

    let mut unbounded = Queue::from_items(0..100);
    assert_eq!(unbounded.capacity(), None);
    assert!(unbounded.enqueue(100).is_ok());
    assert_eq!(unbounded.len(), 101);
}

#[test]
fn counters() {
    let a = HashMap::from([(0, 1), (2, 3)]);
    let b = HashMap::from([(2, 1), (5, 2)]);
    let sum = queue::add_counters(&a, &b);
    assert!(queue::counters_equal(&sum, &HashMap::from([(0, 1), (2, 4), (5, 2)])));
    assert!(!queue::counters_equal(&a, &b));
}

#[test]
fn grid_helpers() {
    assert!(grid::out_of_bounds(-1, 0, 3, 3));
    assert!(grid::out_of_bounds(0, 3, 3, 3));
    assert!(!grid::out_of_bounds(2, 2, 3, 3));

    let around = grid::neighbors(Point::new(0, 0)).collect::<Vec<_>>();
    assert_eq!(around.len(), 4);
    assert!(around.contains(&Point::new(0, -1)));

    assert_eq!(grid::arrow_direction('^'), Some(Direction::new(0, -1)));
    assert_eq!(grid::arrow_direction('x'), None);
    assert_eq!(DirLabel::all().len(), 8);
    assert!(DirLabel::cardinals().iter().all(|label| label.is_cardinal()));
    assert!(DirLabel::corners().iter().all(|label| !label.is_cardinal()));
    assert_eq!(DirLabel::UpLeft.short(), "ul");
    assert_eq!(
        Point::new(1, 1).step_n(DirLabel::DownRight.direction(), 2),
        Point::new(3, 3)
    );
    assert_eq!(grid::char_grid("ab\n\ncd\n"), vec![vec!['a', 'b'], vec!['c', 'd']]);
}

#[test]
fn sequence_helpers() {
    assert_eq!(seq::drop_one(&[1, 2, 3]), vec![vec![2, 3], vec![1, 3], vec![1, 2]]);
    assert_eq!(seq::middle_index(&[1, 2, 3, 4, 5]), Some(2));
    assert_eq!(seq::middle_index::<u8>(&[]), None);
    assert_eq!(
        seq::pairs(&[1, 2, 3]).collect::<Vec<_>>(),
        vec![(&1, &2), (&1, &3), (&2, &3)]
    );
    assert_eq!(seq::pairwise(&[1]).count(), 0);
    assert_eq!(
        seq::pairwise(&[1, 2, 3]).collect::<Vec<_>>(),
        vec![(&1, &2), (&2, &3)]
    );
    assert_eq!(
        seq::combinations(&['a', 'b', 'c'], 2),
        vec![vec!['a', 'b'], vec!['a', 'c'], vec!['b', 'c']]
    );
    assert_eq!(seq::combinations(&[1, 2], 0), vec![Vec::<i32>::new()]);
    assert!(seq::combinations(&[1, 2], 3).is_empty());
}

#[test]
fn load_file_names_missing_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.txt");
    let err = utils::load_file(&path).unwrap_err();
    assert!(err.to_string().contains("nope.txt"));

    std::fs::write(&path, "hi\n").unwrap();
    assert_eq!(utils::load_file(&path).unwrap(), "hi\n");
}
