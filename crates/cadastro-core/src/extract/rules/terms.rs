//! Static term tables: form labels and address-context words.

/// Words that appear as standalone labels or section headers on forms.
const FORM_LABELS: &[&str] = &[
    "cliente", "dados de contato", "dados", "contato",
    "informações fiscais", "informações", "fiscais",
    "endereço", "endereco", "nome", "e-mail", "email",
    "telefone", "cpf", "cnpj", "cep", "rua / logradouro",
    "rua/logradouro", "rua logradouro", "rua", "logradouro",
    "número", "numero", "nº", "n░", "complemento",
    "bairro / distrito", "bairro/distrito", "bairro", "distrito",
    "cidade", "uf / estado", "uf/estado", "uf", "estado",
    "município", "municipio", "razão social", "razao social",
    "nome fantasia",
];

/// Words whose presence marks a line as address material.
///
/// Besides street and building words this includes a few place names from
/// the Porto Alegre documents the heuristics were tuned on.
const ADDRESS_TERMS: &[&str] = &[
    "torre", "apto", "apartamento", "bloco", "sala", "andar",
    "casa", "lote", "quadra", "avenida", "rua", "estrada",
    "rodovia", "praça", "travessa", "alameda", "viela",
    "passagem", "logradouro", "protásio", "protasio", "alves",
    "morro", "santana", "porto", "alegre",
];

/// Classifies lines against the label and address-term tables.
#[derive(Debug, Clone)]
pub struct TermClassifier {
    form_labels: Vec<String>,
    address_terms: Vec<String>,
}

impl TermClassifier {
    /// Create a classifier with the built-in tables.
    pub fn new() -> Self {
        Self {
            form_labels: FORM_LABELS.iter().map(|t| t.to_string()).collect(),
            address_terms: ADDRESS_TERMS.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Add labels on top of the built-in ones.
    pub fn with_form_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.form_labels
            .extend(labels.into_iter().map(|l| l.as_ref().to_lowercase()));
        self
    }

    /// Add address words on top of the built-in ones.
    pub fn with_address_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.address_terms
            .extend(terms.into_iter().map(|t| t.as_ref().to_lowercase()));
        self
    }

    /// Whether the whole line is a form label, optionally followed by `:` or `-`.
    pub fn is_form_label(&self, line: &str) -> bool {
        let normalized = line.trim().to_lowercase();
        let bare = normalized
            .strip_suffix(':')
            .or_else(|| normalized.strip_suffix('-'))
            .unwrap_or(&normalized);

        self.form_labels.iter().any(|label| label == bare)
    }

    /// Whether the line contains any address-context word.
    pub fn mentions_address_word(&self, line: &str) -> bool {
        let normalized = line.to_lowercase();
        self.address_terms
            .iter()
            .any(|term| normalized.contains(term.as_str()))
    }
}

impl Default for TermClassifier {
    fn default() -> Self {
        Self::new()
    }
}
