//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos.

use chrono::{NaiveDate, NaiveTime};
use validator::ValidationError;

/// Validar y convertir string a fecha
pub fn validate_fecha(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("fecha");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validar y convertir string a hora
pub fn validate_hora(value: &str) -> Result<NaiveTime, ValidationError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| {
            let mut error = ValidationError::new("hora");
            error.add_param("value".into(), &value.to_string());
            error.add_param("format".into(), &"HH:MM".to_string());
            error
        })
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de placa (identificador fijo de 7 caracteres)
pub fn validate_placa(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() != 7 {
        let mut error = ValidationError::new("placa");
        error.add_param("value".into(), &value.to_string());
        error.add_param("length".into(), &7);
        return Err(error);
    }
    Ok(())
}

/// Validar formato de VIN (identificador fijo de 17 caracteres)
pub fn validate_vin(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() != 17 {
        let mut error = ValidationError::new("vin");
        error.add_param("value".into(), &value.to_string());
        error.add_param("length".into(), &17);
        return Err(error);
    }
    Ok(())
}

/// Validar formato de correo electrónico (básico)
pub fn validate_correo(value: &str) -> Result<(), ValidationError> {
    if !value.contains('@') || !value.contains('.') {
        let mut error = ValidationError::new("correo");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de teléfono (básico)
pub fn validate_telefono(value: &str) -> Result<(), ValidationError> {
    let solo_digitos = value.chars().filter(|c| c.is_ascii_digit()).count();
    if solo_digitos < 7 || solo_digitos > 15 {
        let mut error = ValidationError::new("telefono");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_fecha() {
        assert!(validate_fecha("2025-03-14").is_ok());
        assert!(validate_fecha("14/03/2025").is_err());
        assert!(validate_fecha("2025-13-01").is_err());
    }

    #[test]
    fn test_validate_hora() {
        assert!(validate_hora("09:30").is_ok());
        assert!(validate_hora("09:30:00").is_ok());
        assert!(validate_hora("25:00").is_err());
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("hola").is_ok());
        assert!(validate_not_empty("   ").is_err());
        assert!(validate_not_empty("").is_err());
    }

    #[test]
    fn test_validate_placa() {
        assert!(validate_placa("ABC1234").is_ok());
        assert!(validate_placa("ABC123").is_err());
        assert!(validate_placa("ABC12345").is_err());
    }

    #[test]
    fn test_validate_vin() {
        assert!(validate_vin("1HGCM82633A004352").is_ok());
        assert!(validate_vin("1HGCM82633A00435").is_err());
        assert!(validate_vin("").is_err());
    }

    #[test]
    fn test_validate_correo() {
        assert!(validate_correo("taller@example.com").is_ok());
        assert!(validate_correo("sin-arroba").is_err());
    }

    #[test]
    fn test_validate_telefono() {
        assert!(validate_telefono("555-123-4567").is_ok());
        assert!(validate_telefono("123").is_err());
    }
}
