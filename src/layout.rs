//! Surface layout classification: cube-map face matching and volume checks.

use crate::error::DdsError;
use crate::surface::Surface;

/// The three naming vocabularies for the six cube-map face directions, in
/// +X, −X, +Y, −Y, +Z, −Z order. A surface qualifies as a face if its label
/// contains any of the three variants for that face.
const CUBEMAP_FACE_NAMES: [[&str; 6]; 3] = [
    [
        "positive x",
        "negative x",
        "positive y",
        "negative y",
        "positive z",
        "negative z",
    ],
    ["pos x", "neg x", "pos y", "neg y", "pos z", "neg z"],
    ["+x", "-x", "+y", "-y", "+z", "-z"],
];

const FACE_TAGS: [&str; 6] = ["+x", "-x", "+y", "-y", "+z", "-z"];

/// Resolve six surfaces to cube-map faces by label.
///
/// Labels are matched by unanchored substring search against the three
/// vocabularies; surfaces are scanned in the given order and faces in
/// +X..−Z order, and the first face a label matches wins. Each surface is
/// assigned to at most one face, so a valid result always maps six distinct
/// surfaces.
///
/// Returns the index of the surface for each face, in face order.
///
/// # Errors
///
/// Returns [`DdsError::NotACubeMap`] when there are not exactly six
/// surfaces, a face cannot be resolved, or the faces differ in size or
/// channel depth.
pub fn detect_cube_faces(surfaces: &[Surface]) -> Result<[usize; 6], DdsError> {
    if surfaces.len() != 6 {
        return Err(DdsError::NotACubeMap(format!(
            "expected 6 surfaces, found {}",
            surfaces.len()
        )));
    }

    let mut faces = [usize::MAX; 6];
    for (i, surface) in surfaces.iter().enumerate() {
        'faces: for j in 0..6 {
            if faces[j] != usize::MAX {
                continue;
            }
            for vocabulary in &CUBEMAP_FACE_NAMES {
                if surface.label().contains(vocabulary[j]) {
                    faces[j] = i;
                    break 'faces;
                }
            }
        }
    }

    for (j, &face) in faces.iter().enumerate() {
        if face == usize::MAX {
            tracing::warn!(face = FACE_TAGS[j], "no surface label matches face");
            return Err(DdsError::NotACubeMap(format!(
                "no surface label matches face {}",
                FACE_TAGS[j]
            )));
        }
    }

    let first = &surfaces[faces[0]];
    for &face in &faces[1..] {
        let surface = &surfaces[face];
        if surface.width() != first.width() || surface.height() != first.height() {
            return Err(DdsError::NotACubeMap(
                "not all faces are the same size".to_string(),
            ));
        }
    }
    for &face in &faces[1..] {
        if surfaces[face].channels() != first.channels() {
            return Err(DdsError::NotACubeMap(
                "not all faces are the same type (perhaps some faces have \
                 transparency and others do not?)"
                    .to_string(),
            ));
        }
    }

    Ok(faces)
}

/// Check that the surfaces form a consistent volume slice stack.
///
/// Every slice must share width, height and channel depth with the first.
///
/// # Errors
///
/// Returns [`DdsError::NotAVolume`] on an empty stack or any mismatch.
pub fn validate_volume(surfaces: &[Surface]) -> Result<(), DdsError> {
    let first = surfaces
        .first()
        .ok_or_else(|| DdsError::NotAVolume("no surfaces".to_string()))?;

    for slice in &surfaces[1..] {
        if slice.width() != first.width() || slice.height() != first.height() {
            return Err(DdsError::NotAVolume(
                "not all slices are the same size".to_string(),
            ));
        }
    }
    for slice in &surfaces[1..] {
        if slice.channels() != first.channels() {
            return Err(DdsError::NotAVolume(
                "not all slices are the same type (perhaps some slices have \
                 transparency and others do not?)"
                    .to_string(),
            ));
        }
    }

    Ok(())
}
