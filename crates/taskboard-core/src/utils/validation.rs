//! Input validation for task drafts.
//!
//! Adapters hand over raw, optional fields; these functions trim, apply
//! defaults and reject bad input with a [`CoreError::Validation`] whose
//! message is safe to show to a user.

use crate::domain::{NewTask, TaskCategory, TaskDraft, TaskReplacement, TaskUpdate};
use crate::ports::CoreError;

/// Maximum length of a task name, in characters.
pub const MAX_NAME_LEN: usize = 100;

/// Validate and trim a task name.
///
/// # Examples
///
/// ```rust
/// use taskboard_core::utils::validation::validate_nombre;
///
/// assert_eq!(validate_nombre(Some("  Buy milk ")).unwrap(), "Buy milk");
/// assert!(validate_nombre(Some("   ")).is_err());
/// assert!(validate_nombre(None).is_err());
/// ```
pub fn validate_nombre(raw: Option<&str>) -> Result<String, CoreError> {
    let nombre = raw.map(str::trim).unwrap_or_default();
    if nombre.is_empty() {
        return Err(CoreError::Validation("Name is required".to_string()));
    }
    if nombre.chars().count() > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Name cannot exceed {MAX_NAME_LEN} characters"
        )));
    }
    Ok(nombre.to_string())
}

/// Validate and trim a task description.
pub fn validate_descripcion(raw: Option<&str>) -> Result<String, CoreError> {
    let descripcion = raw.map(str::trim).unwrap_or_default();
    if descripcion.is_empty() {
        return Err(CoreError::Validation("Description is required".to_string()));
    }
    Ok(descripcion.to_string())
}

/// Resolve a category name. Missing or blank input means the default.
pub fn validate_tipo(raw: Option<&str>) -> Result<TaskCategory, CoreError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(TaskCategory::default()),
        Some(name) => TaskCategory::parse(name)
            .ok_or_else(|| CoreError::Validation(format!("Invalid task category: {name}"))),
    }
}

/// Validate a task number.
///
/// `None` and `0` both mean "not given". Negative numbers are rejected.
pub fn validate_numero(raw: Option<i64>) -> Result<Option<i64>, CoreError> {
    match raw {
        None | Some(0) => Ok(None),
        Some(n) if n < 0 => Err(CoreError::Validation(
            "Task number must be a positive integer".to_string(),
        )),
        Some(n) => Ok(Some(n)),
    }
}

/// Validate a create request.
pub fn validate_draft(draft: &TaskDraft) -> Result<NewTask, CoreError> {
    Ok(NewTask {
        nombre: validate_nombre(draft.nombre.as_deref())?,
        descripcion: validate_descripcion(draft.descripcion.as_deref())?,
        tipo: validate_tipo(draft.tipo.as_deref())?,
        numero: validate_numero(draft.numero)?,
    })
}

/// Validate a full-replacement request.
///
/// Omitted `completed` resets the flag to `false`; omitted `numero` keeps
/// the stored number.
pub fn validate_replacement(replacement: &TaskReplacement) -> Result<TaskUpdate, CoreError> {
    Ok(TaskUpdate {
        nombre: validate_nombre(replacement.nombre.as_deref())?,
        descripcion: validate_descripcion(replacement.descripcion.as_deref())?,
        tipo: validate_tipo(replacement.tipo.as_deref())?,
        numero: validate_numero(replacement.numero)?,
        completed: replacement.completed.unwrap_or(false),
    })
}
