// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Organigrama-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Organigrama and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use serde_json::{json, Value};

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Small,
    Medium,
    Large,
}

impl Case {
    fn size(self) -> usize {
        match self {
            Self::Small => 200,
            Self::Medium => 2_000,
            Self::Large => 20_000,
        }
    }
}

const UNITS: [(&str, &str, &str); 6] = [
    ("Retail", "Tiendas", "Ventas"),
    ("Retail", "Bodega", "Logística"),
    ("Corporativo", "Finanzas", "Contabilidad"),
    ("Corporativo", "Finanzas", "Tesorería"),
    ("Corporativo", "Sistemas", "Desarrollo"),
    ("Industrial", "Planta", "Producción"),
];

fn position_code(index: usize) -> String {
    format!("{:05}", index + 1)
}

/// A 4-ary org of `Persona` records: every 7th position vacant, every 13th employee listed
/// twice (numeric login first).
pub fn people(case: Case) -> Value {
    let mut records: Vec<Value> = Vec::with_capacity(case.size() + case.size() / 13);
    for index in 0..case.size() {
        let (bu, cc, dept) = UNITS[index % UNITS.len()];
        let reports_to = if index == 0 {
            String::new()
        } else {
            position_code((index - 1) / 4)
        };
        let vacant = index > 0 && index % 7 == 0;
        let employee = if vacant { String::new() } else { format!("E{index}") };

        let record = json!({
            "codigoPosicion": position_code(index),
            "codigoPosicionReporta": reports_to,
            "codigoEmpleado": employee,
            "vacante": if vacant { "1" } else { "0" },
            "puesto": format!("Puesto {index}"),
            "nombre": format!("Nombre{index}"),
            "apellido": format!("Apellido{index}"),
            "nombreLineaNegocio": bu,
            "nombreCentroCosto": cc,
            "nombreDepartamento": dept,
            "userid": format!("CORP\\user{index}"),
            "nivel": (index % 20 + 1).to_string(),
        });

        if !vacant && index % 13 == 0 {
            let mut numeric = record.clone();
            numeric["userid"] = json!(format!("{}", 10_000_000 + index));
            records.push(numeric);
        }
        records.push(record);
    }
    json!({ "Organigrama": { "Persona": records } })
}

/// The same org as `Cargo` records with embedded occupants.
pub fn positions(case: Case) -> Value {
    let records: Vec<Value> = (0..case.size())
        .map(|index| {
            let (bu, cc, dept) = UNITS[index % UNITS.len()];
            let reports_to = if index == 0 {
                String::new()
            } else {
                position_code((index - 1) / 4)
            };
            let occupants: Vec<Value> = if index > 0 && index % 7 == 0 {
                Vec::new()
            } else {
                vec![json!({
                    "codigoEmpleado": format!("E{index}"),
                    "nombre": format!("Nombre{index}"),
                    "puestoEmpleado": format!("Puesto {index}"),
                    "userid": format!("user{index}"),
                })]
            };
            json!({
                "codigoPosicion": position_code(index),
                "codigoPosicionReporta": reports_to,
                "puesto": format!("Puesto {index}"),
                "nombreLineaNegocio": bu,
                "nombreCentroCosto": cc,
                "nombreDepartamento": dept,
                "Empleado": occupants,
            })
        })
        .collect();
    json!({ "Cargo": records })
}
