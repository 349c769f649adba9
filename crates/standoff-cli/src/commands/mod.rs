pub mod auto;
pub mod play;

use std::path::Path;

use standoff_encounter::Transcript;

/// Write the transcript in the format its extension asks for.
fn write_transcript(transcript: &Transcript, path: &Path) -> Result<(), String> {
    let content = match path.extension().and_then(|e| e.to_str()) {
        Some("md" | "markdown") => transcript.export_markdown(),
        Some("json") => transcript
            .export_json()
            .map_err(|e| format!("JSON serialization error: {e}"))?,
        _ => transcript.export_text(),
    };

    std::fs::write(path, content)
        .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
    println!("  Transcript saved to {}", path.display());
    Ok(())
}
