// Copyright 2024 OctoFHIR Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Mathematical operators

use crate::error::OperationResult;
use crate::model::OperandType;
use crate::registry::{CategoryKind, Constraint, OperatorDefinition, Registry};

/// Canonical names and symbols of the mathematical operators, in catalog order
pub const MATHEMATICAL_OPERATORS: [(&str, &str); 6] = [
    ("add", "+"),
    ("subtract", "-"),
    ("multiply", "*"),
    ("divide", "/"),
    ("mod", "%"),
    ("pow", "^"),
];

fn arithmetic(name: &str, symbol: &str) -> OperatorDefinition {
    let definition = OperatorDefinition::binary(CategoryKind::Mathematical, name, symbol)
        .accepts(OperandType::NUMERIC);
    match name {
        "divide" => definition.constraint(Constraint::NonZeroDivisor),
        _ => definition,
    }
}

/// Register all mathematical operators
pub(crate) fn register_mathematical_operators(registry: &mut Registry) -> OperationResult<()> {
    for (name, symbol) in MATHEMATICAL_OPERATORS {
        registry.register(arithmetic(name, symbol))?;
    }
    Ok(())
}
