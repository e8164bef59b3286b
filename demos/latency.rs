//! Ping-pong round-trip latency over a pair of unbounded SPSC queues,
//! sampled with `minstant`.
//!
//! Run with `cargo run --release --example latency`.

use std::thread;

use relay_queue::spsc;

const ROUNDS: u64 = 100_000;

fn pin_to(nth: usize) {
  if let Some(ids) = core_affinity::get_core_ids() {
    if let Some(id) = ids.get(nth % ids.len()) {
      core_affinity::set_for_current(*id);
    }
  }
}

fn main() {
  let (mut ping_tx, mut ping_rx) = spsc::unbounded::<u64>();
  let (mut pong_tx, mut pong_rx) = spsc::unbounded::<u64>();

  let echo = thread::spawn(move || {
    pin_to(1);
    for _ in 0..ROUNDS {
      let v = loop {
        match ping_rx.pop() {
          Some(v) => break v,
          None => std::hint::spin_loop(),
        }
      };
      pong_tx.push(v).unwrap();
    }
  });

  pin_to(0);
  let mut total_ns = 0u64;
  for i in 0..ROUNDS {
    let t0 = minstant::Instant::now();
    ping_tx.push(i).unwrap();
    let v = loop {
      match pong_rx.pop() {
        Some(v) => break v,
        None => std::hint::spin_loop(),
      }
    };
    total_ns += t0.elapsed().as_nanos() as u64;
    assert_eq!(v, i);
  }
  echo.join().unwrap();

  println!(
    "round-trip mean {} ns over {} rounds (tsc available: {})",
    total_ns / ROUNDS,
    ROUNDS,
    minstant::is_tsc_available()
  );
}
