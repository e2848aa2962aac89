use std::error::Error;
use std::path::Path;

use log::{info, warn};

use crate::types::SensorPacket;

/// Leser inn pakkelogg fra disk (JSON-liste av pakker).
/// Hvis filen ikke finnes, returneres tom liste.
pub fn load_packets(path: &str) -> Result<Vec<SensorPacket>, Box<dyn Error>> {
    if Path::new(path).exists() {
        let contents = std::fs::read_to_string(path)?;
        let packets: Vec<SensorPacket> = serde_json::from_str(&contents)?;
        info!("pakkelogg lastet fra {} ({} pakker)", path, packets.len());
        Ok(packets)
    } else {
        warn!("fant ikke pakkelogg på {}, returnerer tom liste", path);
        Ok(Vec::new())
    }
}

/// Lagrer pakkelogg til disk som JSON (pretty-print).
pub fn save_packets(packets: &[SensorPacket], path: &str) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(packets)?;
    std::fs::write(path, json)?;
    info!("pakkelogg lagret til {} ({} pakker)", path, packets.len());
    Ok(())
}
