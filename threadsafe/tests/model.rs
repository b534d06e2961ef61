#![cfg(not(feature = "loom"))]

//! Random operation sequences applied to each container and to a plain std
//! collection, checking that both report the same results.

use std::collections::VecDeque;

use rand::{rngs::StdRng, Rng, SeedableRng};
use threadsafe::{Array, Queue, Stack};

const SEED: u64 = 0x5eed;
const STEPS: usize = 5000;

#[test]
fn array_matches_vec() {
  let mut rng = StdRng::seed_from_u64(SEED);
  let arr = Array::<u32>::new(4);
  let mut model = vec![0u32; 4];

  for _ in 0..STEPS {
    // indices may run past the end so the rejection paths get exercised too
    let index = rng.random_range(0..model.len() + 3);
    let value = rng.random::<u32>();

    match rng.random_range(0..7) {
      0 => assert_eq!(arr.get(index), model.get(index).copied()),
      1 => {
        let ok = index < model.len();
        if ok {
          model[index] = value;
        }
        assert_eq!(arr.set(index, value), ok);
      }
      2 => {
        arr.push(value);
        model.push(value);
        assert_eq!(arr.get(model.len() - 1), Some(value));
      }
      3 => {
        let ok = index <= model.len();
        if ok {
          model.insert(index, value);
        }
        assert_eq!(arr.insert(index, value), ok);
      }
      4 => {
        let expected = (index < model.len()).then(|| model.remove(index));
        assert_eq!(arr.remove(index), expected);
      }
      5 => {
        let probe = model.get(index).copied().unwrap_or(value);
        assert_eq!(arr.contains(&probe), model.contains(&probe));
      }
      _ => {
        if rng.random_ratio(1, 50) {
          arr.clear();
          model.clear();
        }
      }
    }

    assert_eq!(arr.len(), model.len());
  }

  assert_eq!(arr.values(), model);
}

#[test]
fn queue_matches_vec_deque() {
  let mut rng = StdRng::seed_from_u64(SEED);
  let queue = Queue::new();
  let mut model = VecDeque::new();

  for _ in 0..STEPS {
    match rng.random_range(0..5) {
      0 | 1 => {
        let value = rng.random::<u64>();
        queue.enqueue(value);
        model.push_back(value);
      }
      2 => assert_eq!(queue.dequeue(), model.pop_front()),
      3 => assert_eq!(queue.peek(), model.front().copied()),
      _ => {
        if rng.random_ratio(1, 50) {
          queue.clear();
          model.clear();
        }
      }
    }

    assert_eq!(queue.len(), model.len());
    assert_eq!(queue.is_empty(), model.is_empty());
  }

  assert_eq!(queue.values(), Vec::from(model));
}

#[test]
fn stack_matches_vec() {
  let mut rng = StdRng::seed_from_u64(SEED);
  let stack = Stack::new();
  let mut model = Vec::new();

  for _ in 0..STEPS {
    match rng.random_range(0..5) {
      0 | 1 => {
        let value = rng.random::<u64>();
        stack.push(value);
        model.push(value);
      }
      2 => assert_eq!(stack.pop(), model.pop()),
      3 => assert_eq!(stack.peek(), model.last().copied()),
      _ => {
        if rng.random_ratio(1, 50) {
          stack.clear();
          model.clear();
        }
      }
    }

    assert_eq!(stack.len(), model.len());
  }

  model.reverse();
  assert_eq!(stack.values(), model);
}
