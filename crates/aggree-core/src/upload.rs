use serde::Deserialize;
use serde::Serialize;

/// What the console knows about a picked file. Contents are never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    Processing,
    Completed,
    /// Declared for completeness; no code path produces it.
    Error,
}

impl UploadStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightSummary {
    pub total_records: u32,
    pub data_quality: u8,
    pub completeness: u8,
    pub anomalies: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyMetric {
    pub label: String,
    pub value: String,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownRow {
    pub name: String,
    pub percentage: u8,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInsights {
    pub summary: InsightSummary,
    pub key_metrics: Vec<KeyMetric>,
    pub recommendations: Vec<String>,
    pub regions: Vec<BreakdownRow>,
    pub products: Vec<BreakdownRow>,
    pub ai_suggestions: Vec<String>,
}

impl FileInsights {
    pub fn is_empty(&self) -> bool {
        self.key_metrics.is_empty() && self.recommendations.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub id: String,
    pub name: String,
    pub mime: String,
    pub size: u64,
    pub uploaded_at: String,
    pub status: UploadStatus,
    pub insights: Option<FileInsights>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Text,
    Data,
}

impl FileKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Text => "text",
            Self::Data => "data",
        }
    }
}

pub fn file_kind(mime: &str) -> FileKind {
    if mime.contains("image") {
        FileKind::Image
    } else if mime.contains("text") || mime.contains("csv") {
        FileKind::Text
    } else {
        FileKind::Data
    }
}

/// MIME guess from the extension, for picked paths that carry no type.
pub fn guess_mime(name: &str) -> &'static str {
    let ext = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "csv" => "text/csv",
        "txt" | "log" => "text/plain",
        "json" => "application/json",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        _ => "application/octet-stream",
    }
}

pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[unit])
}

#[derive(Debug, Clone, Default)]
pub struct UploadQueue {
    files: Vec<UploadedFile>,
    next_id: u64,
}

impl UploadQueue {
    /// Appends a file in `Processing` and returns its id.
    pub fn enqueue(&mut self, meta: FileMeta, uploaded_at: String) -> String {
        self.next_id = self.next_id.saturating_add(1);
        let id = format!("file-{}", self.next_id);
        self.files.push(UploadedFile {
            id: id.clone(),
            name: meta.name,
            mime: meta.mime,
            size: meta.size,
            uploaded_at,
            status: UploadStatus::Processing,
            insights: None,
        });
        id
    }

    /// Marks a processing entry completed. Returns false for ids that are
    /// unknown or no longer processing.
    pub fn complete(&mut self, id: &str, insights: FileInsights) -> bool {
        let Some(file) = self
            .files
            .iter_mut()
            .find(|file| file.id == id && file.status == UploadStatus::Processing)
        else {
            return false;
        };
        file.status = UploadStatus::Completed;
        file.insights = Some(insights);
        true
    }

    pub fn get(&self, id: &str) -> Option<&UploadedFile> {
        self.files.iter().find(|file| file.id == id)
    }

    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }

    pub fn processing_count(&self) -> usize {
        self.files
            .iter()
            .filter(|file| file.status == UploadStatus::Processing)
            .count()
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn file_sizes_use_binary_units() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5 MB");
    }

    #[test]
    fn kinds_follow_mime() {
        assert_eq!(file_kind("image/png"), FileKind::Image);
        assert_eq!(file_kind("text/csv"), FileKind::Text);
        assert_eq!(file_kind("application/json"), FileKind::Data);
        assert_eq!(guess_mime("Sales.CSV"), "text/csv");
        assert_eq!(guess_mime("noext"), "application/octet-stream");
    }

    #[test]
    fn ids_are_unique_per_queue() {
        let mut queue = UploadQueue::default();
        let meta = FileMeta {
            name: "a.csv".to_string(),
            mime: "text/csv".to_string(),
            size: 10,
        };
        let first = queue.enqueue(meta.clone(), "t0".to_string());
        let second = queue.enqueue(meta, "t0".to_string());
        assert_ne!(first, second);
        assert_eq!(queue.processing_count(), 2);
    }
}
