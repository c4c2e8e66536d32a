use std::collections::{HashMap, HashSet};

use crate::core::file::BioDataFile;

/// Separator placed between the path segments of a computed label
pub const LABEL_SEPARATOR: &str = " > ";

/// Fill in a label for every file that lacks one.
///
/// A path segment is kept if no other file's path contains it. The label is
/// the kept segments in path order, joined by [`LABEL_SEPARATOR`], and is
/// empty when every segment is shared. Supplied labels are left untouched.
pub fn compute_labels(files: &mut [BioDataFile]) {
    let mut file_counts: HashMap<&str, usize> = HashMap::new();

    for file in files.iter() {
        // Presence per file, not occurrences
        let distinct: HashSet<&str> = file.path_segments().collect();
        for segment in distinct {
            *file_counts.entry(segment).or_default() += 1;
        }
    }

    let labels: Vec<Option<String>> = files
        .iter()
        .map(|file| {
            if file.label.is_some() {
                return None;
            }
            let unique: Vec<&str> = file
                .path_segments()
                .filter(|segment| file_counts.get(segment) == Some(&1))
                .collect();
            Some(unique.join(LABEL_SEPARATOR))
        })
        .collect();

    for (file, label) in files.iter_mut().zip(labels) {
        if label.is_some() {
            file.label = label;
        }
    }
}
