// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Organigrama-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Organigrama and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Canonical records for the by-person feed (`Persona` documents).

use serde_json::Value;

use super::document::RawDocument;
use super::fields::{field, flag, nested_field};
use super::position::{POSITION_CODE, REPORTS_TO_CODE};

/// One person (or vacancy) record, every field a trimmed string (possibly empty).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonRecord {
    pub position_code: String,
    pub reports_to_code: String,
    pub employee_code: String,
    /// Explicit manager by employee code, direct or under `JefeInmediato`.
    pub manager_code: String,
    pub vacant: bool,
    pub title: String,
    pub business_unit_code: String,
    pub business_unit_name: String,
    pub cost_center_code: String,
    pub cost_center_name: String,
    pub department_code: String,
    pub department_name: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub photo: String,
    pub manual_path: String,
    pub hire_date: String,
    pub login: String,
    pub level: String,
}

impl PersonRecord {
    pub fn from_value(record: &Value) -> Self {
        let mut manager_code = field(record, &["codigoEmpleadoJefe"]);
        if manager_code.is_empty() {
            manager_code = nested_field(record, &["JefeInmediato", "codigoEmpleadoJefe"]);
        }

        Self {
            position_code: field(record, POSITION_CODE),
            reports_to_code: field(record, REPORTS_TO_CODE),
            employee_code: field(record, &["codigoEmpleado", "CODIGO"]),
            manager_code,
            vacant: flag(record, &["vacante"]),
            title: field(record, &["puesto", "DESCRIPCION"]),
            business_unit_code: field(record, &["unidadNegocio", "codDepAx"]),
            business_unit_name: field(record, &["nombreLineaNegocio", "Desc_DepAx"]),
            cost_center_code: field(record, &["centroCosto", "codCentroCosto"]),
            cost_center_name: field(record, &["nombreCentroCosto", "CENTRO_COSTO"]),
            department_code: field(record, &["departamento", "codDepartamento"]),
            department_name: field(record, &["nombreDepartamento", "DEPARTAMENTO"]),
            name: field(record, &["nombre", "NOMBRE"]),
            surname: field(record, &["apellido", "APELLIDO"]),
            email: field(record, &["emailCorporativo", "DIRECCION_E_MAIL"]),
            photo: field(record, &["foto", "FotoWeb"]),
            manual_path: field(record, &["rutaManual", "ruta", "manual"]),
            hire_date: field(record, &["fechaIngreso", "InicioContrato"]),
            login: field(record, &["userid", "UserId"]),
            level: field(record, &["nivel", "nivelJerarquico", "NIVEL"]),
        }
    }

    /// Vacant when explicitly flagged or when no employee code is present.
    pub fn is_vacant(&self) -> bool {
        self.vacant || self.employee_code.is_empty()
    }
}

/// Normalizes every record in `doc`, in source order.
///
/// Records without a position code are kept here; the builder decides what to skip.
pub fn normalize_people(doc: &RawDocument) -> Vec<PersonRecord> {
    doc.records().iter().map(PersonRecord::from_value).collect()
}
