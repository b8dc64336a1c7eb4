use crossbeam_channel::unbounded;
use log::debug;

use bramgen_core::{InitBlock, SliceEncoder, WordSource};

/// Computes every init block, indexed `[instance][row]`
/// With more than one job, instances are spread over scoped worker threads
/// and reassembled in instance order, so the result matches the sequential path
pub fn generate_blocks<S>(encoder: &SliceEncoder<S>, jobs: usize) -> Vec<Vec<InitBlock>>
where
    S: WordSource + Sync,
{
    let fan_out = encoder.organization().fan_out();
    let jobs = jobs.max(1).min(fan_out);
    if jobs == 1 {
        return encoder.all_blocks();
    }

    debug!("Generating {} instances on {} workers", fan_out, jobs);
    let (tx, rx) = unbounded();
    let mut slots: Vec<Vec<InitBlock>> = vec![Vec::new(); fan_out];

    std::thread::scope(|scope| {
        for worker in 0..jobs {
            let tx = tx.clone();
            scope.spawn(move || {
                for instance in (worker..fan_out).step_by(jobs) {
                    // Receiver only goes away if the collector is gone
                    if tx.send((instance, encoder.instance_blocks(instance))).is_err() {
                        break;
                    }
                }
            });
        }
        // Close the channel once every worker's sender is dropped
        drop(tx);

        for (instance, blocks) in rx.iter() {
            slots[instance] = blocks;
        }
    });

    slots
}
