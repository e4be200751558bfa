// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Organigrama-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Organigrama and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Canonical records for the by-position feed (`Cargo` documents).

use serde_json::Value;

use super::document::RawDocument;
use super::fields::{field, one_or_many};

pub(crate) const POSITION_CODE: &[&str] =
    &["codigoPosicion", "CodigoPosicion", "COD_POSICION", "Cod_Posicion"];
pub(crate) const REPORTS_TO_CODE: &[&str] = &[
    "codigoPosicionReporta",
    "CodigoPosicionReporta",
    "COD_POSICION_REPORTA",
];

const EMPLOYEE_KEY: &str = "Empleado";

/// One position record, every field a trimmed string (possibly empty).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionRecord {
    pub position_code: String,
    pub reports_to_code: String,
    pub title: String,
    pub description: String,
    pub status: String,
    pub business_unit_code: String,
    pub business_unit_name: String,
    pub cost_center_code: String,
    pub cost_center_name: String,
    pub department_code: String,
    pub department_name: String,
    pub employees: Vec<EmployeeRecord>,
}

/// One occupant entry embedded in a position record under `Empleado`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeRecord {
    pub employee_code: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub photo: String,
    pub job_title: String,
    pub department_name: String,
    pub cost_center_name: String,
    pub business_unit_code: String,
    pub cost_center_code: String,
    pub department_code: String,
    pub business_unit_name: String,
    pub manual_path: String,
    pub hire_date: String,
    pub login: String,
    /// Defaults to the enclosing record's position code.
    pub position_code: String,
}

impl PositionRecord {
    /// Returns `None` for records without a position code.
    pub fn from_value(record: &Value) -> Option<Self> {
        let position_code = field(record, POSITION_CODE);
        if position_code.is_empty() {
            return None;
        }

        let employees = one_or_many(record.get(EMPLOYEE_KEY))
            .into_iter()
            .map(|emp| EmployeeRecord::from_value(emp, &position_code))
            .collect();

        Some(Self {
            reports_to_code: field(record, REPORTS_TO_CODE),
            title: field(record, &["puesto", "DESCRIPCION"]),
            description: field(record, &["descripcionCargo"]),
            status: field(record, &["estadoCargo"]),
            business_unit_code: field(record, &["codLineaNegocio"]),
            business_unit_name: field(record, &["nombreLineaNegocio"]),
            cost_center_code: field(record, &["codCentroCosto"]),
            cost_center_name: field(record, &["nombreCentroCosto"]),
            department_code: field(record, &["codDepartamento"]),
            department_name: field(record, &["nombreDepartamento"]),
            employees,
            position_code,
        })
    }
}

impl EmployeeRecord {
    pub fn from_value(emp: &Value, enclosing_position_code: &str) -> Self {
        let position_code = field(emp, &["codigoPosicion", "COD_POSICION", "Cod_Posicion"]);
        Self {
            employee_code: field(emp, &["codigoEmpleado", "CODIGO"]),
            name: field(emp, &["nombre", "NOMBRE"]),
            surname: field(emp, &["apellido", "APELLIDO"]),
            email: field(emp, &["emailCorporativo", "DIRECCION_E_MAIL"]),
            photo: field(emp, &["foto", "FotoWeb"]),
            job_title: field(emp, &["puestoEmpleado", "DESCRIPCION"]),
            department_name: field(emp, &["nombreDepartamento", "DEPARTAMENTO"]),
            cost_center_name: field(emp, &["nombreCentroCosto", "CENTRO_COSTO"]),
            business_unit_code: field(emp, &["codDepAx", "Cod_DepAx"]),
            cost_center_code: field(emp, &["codCentroCosto", "Cod_CentroCosto"]),
            department_code: field(emp, &["codDepartamento", "Cod_Dep"]),
            business_unit_name: field(emp, &["nombreLineaNegocio", "Desc_DepAx"]),
            manual_path: field(emp, &["manual", "rutaManual", "ruta"]),
            hire_date: field(emp, &["fechaIngreso", "InicioContrato"]),
            login: field(emp, &["userid", "UserId"]),
            position_code: if position_code.is_empty() {
                enclosing_position_code.to_owned()
            } else {
                position_code
            },
        }
    }
}

/// Normalizes every usable position record in `doc`, in source order.
pub fn normalize_positions(doc: &RawDocument) -> Vec<PositionRecord> {
    let records = doc.records();
    let normalized: Vec<PositionRecord> =
        records.iter().filter_map(PositionRecord::from_value).collect();

    let skipped = records.len() - normalized.len();
    if skipped > 0 {
        log::debug!("skipped {skipped} position record(s) without a position code");
    }
    normalized
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{normalize_positions, PositionRecord};
    use crate::format::{RawDocument, RecordKey};

    #[test]
    fn reads_primary_and_legacy_names() {
        let record = json!({
            "COD_POSICION": 17,
            "codigoPosicionReporta": " 00001 ",
            "DESCRIPCION": "Contador",
            "estadoCargo": "A",
            "nombreLineaNegocio": "Farmacias",
            "Empleado": {
                "CODIGO": "900",
                "NOMBRE": "Luis",
                "APELLIDO": "Vera",
                "DIRECCION_E_MAIL": "lvera@example.com",
                "Desc_DepAx": "Farmacias",
                "InicioContrato": "2019-03-01",
                "ruta": "docs\\contabilidad",
                "userid": "INTERNO\\LVERA"
            }
        });

        let parsed = PositionRecord::from_value(&record).expect("position record");
        assert_eq!(parsed.position_code, "17");
        assert_eq!(parsed.reports_to_code, "00001");
        assert_eq!(parsed.title, "Contador");
        assert_eq!(parsed.business_unit_name, "Farmacias");
        assert_eq!(parsed.employees.len(), 1);

        let emp = &parsed.employees[0];
        assert_eq!(emp.employee_code, "900");
        assert_eq!(emp.name, "Luis");
        assert_eq!(emp.email, "lvera@example.com");
        assert_eq!(emp.business_unit_name, "Farmacias");
        assert_eq!(emp.hire_date, "2019-03-01");
        assert_eq!(emp.manual_path, "docs\\contabilidad");
        assert_eq!(emp.login, "INTERNO\\LVERA");
        assert_eq!(emp.position_code, "17", "defaults to the enclosing position");
    }

    #[test]
    fn employee_keeps_its_own_position_code() {
        let record = json!({
            "codigoPosicion": "00010",
            "puesto": "Bodeguero",
            "Empleado": [
                {"codigoEmpleado": "1", "codigoPosicion": "00010"},
                {"codigoEmpleado": "2", "Cod_Posicion": "00011"}
            ]
        });
        let parsed = PositionRecord::from_value(&record).expect("position record");
        let codes: Vec<&str> = parsed
            .employees
            .iter()
            .map(|emp| emp.position_code.as_str())
            .collect();
        assert_eq!(codes, vec!["00010", "00011"]);
    }

    #[test]
    fn records_without_position_code_are_skipped() {
        let doc = RawDocument::detect(
            json!({"Cargo": [{"puesto": "Sin código"}, {"codigoPosicion": "00002", "puesto": "Gerente"}]}),
            RecordKey::Cargo,
        );
        let parsed = normalize_positions(&doc);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].position_code, "00002");
    }
}
