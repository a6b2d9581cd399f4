//! Runs a batch of values through a StringQueue according to the settings

use std::io::BufRead;

use crate::app::cli::Settings;
use crate::queue::buffer::terminated_bytes;
use crate::queue::{handle, QueueError, QueueResult, StringQueue};

/// Queue `values`, apply sort/reverse, then drain the queue from the head
///
/// With `max_len` set, each value is removed through a bounded buffer, so
/// output is cut to `max_len` bytes. A cut that lands inside a multi-byte
/// character yields a replacement character.
pub fn run<I, S>(settings: &Settings, values: I) -> QueueResult<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut queue = handle::create()?;

    for value in values {
        if settings.insert_at_head {
            queue.insert_head(value.as_ref())?;
        } else {
            queue.insert_tail(value.as_ref())?;
        }
    }
    log::info!("Queued {} values", queue.size());

    if settings.sort {
        queue.sort();
    }
    if settings.reverse {
        queue.reverse();
    }
    queue.validate()?;

    let mut output = Vec::with_capacity(queue.size());
    match settings.max_len {
        Some(max_len) => {
            let mut buf = drain_buffer(&queue, max_len)?;
            while !queue.is_empty() {
                queue.remove_head(Some(&mut buf))?;
                output.push(String::from_utf8_lossy(terminated_bytes(&buf)).into_owned());
            }
        }
        None => {
            while let Some(value) = queue.pop_head() {
                output.push(value);
            }
        }
    }

    handle::destroy(Some(queue));
    Ok(output)
}

/// Output buffer for a bounded drain
///
/// Capacity is `max_len + 1`, capped by the longest queued value so a large
/// limit costs no more than the data itself.
fn drain_buffer(queue: &StringQueue, max_len: usize) -> QueueResult<Vec<u8>> {
    let longest = queue.iter().map(str::len).max().unwrap_or(0);
    let capacity = max_len.min(longest).saturating_add(1);

    let mut buf = Vec::new();
    buf.try_reserve_exact(capacity)
        .map_err(QueueError::allocation("remove_head"))?;
    buf.resize(capacity, 0);
    Ok(buf)
}

/// Split `reader` into lines, decoding invalid UTF-8 lossily
///
/// A trailing `\r` is dropped along with the `\n`.
pub fn read_lines<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    reader
        .split(b'\n')
        .map(|line| {
            let mut line = line?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            Ok(String::from_utf8_lossy(&line).into_owned())
        })
        .collect()
}
