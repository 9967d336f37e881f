//! Priority queue demo
//!
//! Sorts the numbers given on the command line by pushing them through a
//! [`PriorityQueue`] and popping until it is empty.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example heap_sort -- 5 1 4 2 8
//! cargo run --example heap_sort -- --descending 5 1 4 2 8
//! ```

use clap::Parser;
use log::info;
use utilkit::prelude::*;

#[derive(Parser)]
#[command(name = "heap_sort")]
#[command(about = "Sort numbers with a binary heap", long_about = None)]
struct Cli {
	/// Pop the largest value first
	#[arg(short, long)]
	descending: bool,

	/// Values to sort
	#[arg(value_name = "VALUE", required = true, allow_negative_numbers = true)]
	values: Vec<i64>,
}

fn main() {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	let descending = cli.descending;
	let mut heap = PriorityQueue::with_capacity(cli.values.len(), move |a: &i64, b: &i64| {
		if descending {
			a > b
		} else {
			a < b
		}
	});
	heap.extend(cli.values);
	info!("Pushed {} values", heap.len());

	let mut sorted = Vec::with_capacity(heap.len());
	while !heap.is_empty() {
		sorted.push(heap.pop());
	}

	let rendered: Vec<String> = sorted.iter().map(i64::to_string).collect();
	println!("{}", rendered.join(" "));
}
