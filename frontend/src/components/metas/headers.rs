/// Column of the metadata definition table: label plus optional help text.
#[derive(Debug, PartialEq, Eq)]
pub struct FormHeader {
    pub key: &'static str,
    pub name: &'static str,
    pub tooltip: Option<&'static str>,
}

/// Headers of the metadata definition table, in row editor cell order.
pub const FORM_HEADERS: &[FormHeader] = &[
    FormHeader {
        key: "formHeader1",
        name: "Columna de origen",
        tooltip: None,
    },
    FormHeader {
        key: "formHeader2",
        name: "Columna publicada",
        tooltip: Some("Nombre de la columna que se entrega a quien usa la API."),
    },
    FormHeader {
        key: "formHeader3",
        name: "Tipo de columna",
        tooltip: None,
    },
    FormHeader {
        key: "formHeader4",
        name: "Longitud máxima",
        tooltip: Some("Entero: dígitos. Decimal: dígitos totales, dígitos decimales"),
    },
    FormHeader {
        key: "formHeader5",
        name: "Formato de fecha",
        tooltip: Some("ej.) yyyy-MM-dd HH:mm:ss"),
    },
    FormHeader {
        key: "formHeader6",
        name: "Permite vacíos",
        tooltip: None,
    },
    FormHeader {
        key: "formHeader7",
        name: "Búsqueda",
        tooltip: None,
    },
];
