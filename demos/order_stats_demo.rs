//! Walks through each structure with small, fixed inputs
//!
//! ## Running
//!
//! ```bash
//! cargo run --example order_stats_demo
//! ```

use rust_order_statistics::dual::DualPriorityQueue;
use rust_order_statistics::kmerge::merge_sorted;
use rust_order_statistics::median::RunningMedian;
use rust_order_statistics::top_k::top_k;
use rust_order_statistics::validate::is_min_heap;

fn print_ends(queue: &mut DualPriorityQueue<i32>) {
    let max = queue.get_max().copied();
    let min = queue.get_min().copied();
    println!("max = {:?}, min = {:?}", max, min);
}

fn main() {
    println!("--- top-k ---");
    let values = [3, 2, 1, 5, 6, 4];
    let mut largest = top_k(values, 2);
    largest.sort_unstable();
    println!("{:?}, k = 2 -> {:?}", values, largest);

    println!("\n--- k-way merge ---");
    let lists = vec![vec![1, 4, 5], vec![1, 3, 4], vec![2, 6]];
    println!("{:?} -> {:?}", lists, merge_sorted(&lists));

    println!("\n--- dual priority queue ---");
    let mut queue = DualPriorityQueue::new();
    queue.extend([5, 1, 8, 2]);
    print_ends(&mut queue);
    println!("remove_max = {:?}", queue.remove_max());
    println!("remove_min = {:?}", queue.remove_min());
    print_ends(&mut queue);
    queue.insert(10);
    queue.remove_max();
    queue.remove_min();
    print!("after inserting 10 and removing both ends: ");
    print_ends(&mut queue);

    println!("\n--- heap validation ---");
    for array in [vec![1, 3, 6, 5, 9, 8], vec![10, 5, 8, 3, 1]] {
        println!("{:?} is a min-heap: {}", array, is_min_heap(&array));
    }

    println!("\n--- running median ---");
    let mut median = RunningMedian::new();
    for x in [1, 2, 3, 4] {
        median.add_num(x);
        println!("after {}: median = {:.1}", x, median.find_median());
    }
}
