//! Status output for humans and for tools.

use std::io::Write;
use wl_network::NetworkStatus;

use crate::error::CliResult;

pub fn write_status(out: &mut impl Write, status: &NetworkStatus, json: bool) -> CliResult<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, status)?;
        writeln!(out)?;
    } else {
        write!(out, "{status}")?;
        writeln!(out, "total volume: {:.3}", status.total_volume())?;
    }
    Ok(())
}
