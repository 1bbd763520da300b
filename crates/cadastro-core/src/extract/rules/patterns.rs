//! Common regex patterns for Brazilian form extraction.
//!
//! Label patterns ending in `_LABEL` are matched against a single lower-cased
//! (or, for company labels, diacritic-folded) line. `_INLINE` patterns run
//! over the whole normalized text and never cross a line break.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Contact
    pub static ref EMAIL: Regex = Regex::new(
        r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"
    ).unwrap();

    // Document numbers (CPF: 11 digits, CNPJ: 14 digits)
    pub static ref CPF: Regex = Regex::new(
        r"\b\d{3}\.?\d{3}\.?\d{3}-?\d{2}\b"
    ).unwrap();

    pub static ref CNPJ: Regex = Regex::new(
        r"\b\d{2}\.?\d{3}\.?\d{3}/?\d{4}-?\d{2}\b"
    ).unwrap();

    pub static ref CPF_FORMATTED: Regex = Regex::new(
        r"\d{3}\.\d{3}\.\d{3}-\d{2}"
    ).unwrap();

    pub static ref CNPJ_FORMATTED: Regex = Regex::new(
        r"\d{2}\.\d{3}\.\d{3}/\d{4}-\d{2}"
    ).unwrap();

    // Whole-line shapes that can never be a person name
    pub static ref PHONE_LINE: Regex = Regex::new(
        r"^\(\d{2}\)\s*\d{4,5}-?\d{4}$"
    ).unwrap();

    pub static ref CPF_LINE: Regex = Regex::new(
        r"^\d{3}\.?\d{3}\.?\d{3}-?\d{2}$"
    ).unwrap();

    pub static ref CNPJ_LINE: Regex = Regex::new(
        r"^\d{2}\.?\d{3}\.?\d{3}/?\d{4}-?\d{2}$"
    ).unwrap();

    // A single phone number inside a longer line
    pub static ref PHONE_TOKEN: Regex = Regex::new(
        r"(?:\+?\b\d{2}[ \t]*)?\(?\b\d{2}\)?[ \t]*\d{4,5}-?\d{4}\b"
    ).unwrap();

    pub static ref DIGIT_RUN: Regex = Regex::new(r"\d{2,}").unwrap();

    // Postal code (CEP)
    pub static ref CEP_LABEL: Regex = Regex::new(r"^cep[:\-]?$").unwrap();

    pub static ref CEP_LINE: Regex = Regex::new(r"^\d{5}-?\d{3}$").unwrap();

    pub static ref CEP_LABELED: Regex = Regex::new(
        r"(?i)\bcep[:\-]?\s*(\d{5}-?\d{3})\b"
    ).unwrap();

    pub static ref CEP_BARE: Regex = Regex::new(r"\b(\d{5}-?\d{3})\b").unwrap();

    pub static ref CEP_DIGITS: Regex = Regex::new(r"\b(\d{8})\b").unwrap();

    // Name context
    pub static ref SECTION_HEADER: Regex = Regex::new(
        r"^(?:cliente|dados de contato|informações fiscais)$"
    ).unwrap();

    pub static ref NAME_LABEL: Regex = Regex::new(r"^nome[:\-]?$").unwrap();

    pub static ref VALUE_LABEL_PREFIX: Regex = Regex::new(
        r"^(?:e-mail|email|telefone|cpf|cnpj|cep)"
    ).unwrap();

    pub static ref NAME_INLINE: Regex = Regex::new(
        r"(?im)\bnome[:\-]?[ \t]*(.+?)[ \t]*$"
    ).unwrap();

    // Company names (matched against folded lines)
    pub static ref FANTASY_NAME_LABEL: Regex = Regex::new(
        r"^nome\s*fantasia[:\-]?$"
    ).unwrap();

    pub static ref LEGAL_NAME_LABEL: Regex = Regex::new(
        r"^razao\s*social[:\-]?$"
    ).unwrap();

    pub static ref FANTASY_NAME_PREFIX: Regex = Regex::new(r"^nome\s*fantasia").unwrap();

    pub static ref LEGAL_NAME_PREFIX: Regex = Regex::new(r"^razao\s*social").unwrap();

    pub static ref UNRELATED_LABEL_PREFIX: Regex = Regex::new(
        r"^(?:cnpj|cpf|inscricao\s*estadual|inscricao\s*municipal|e-mail|email|telefone|cep|rua|logradouro|numero|complemento|bairro|distrito|cidade|uf|estado|endereco)"
    ).unwrap();

    // Tried in order: a value made only of name characters up to the end of
    // the line, then whatever follows the label on that line.
    pub static ref FANTASY_NAME_INLINE: [Regex; 2] = [
        Regex::new(
            r"(?im)nome[ \t]*fantasia[ \t]*[:\-]?[ \t]*([A-Za-zÀ-ÿ0-9 \t'&.,\-]+?)[ \t]*$"
        ).unwrap(),
        Regex::new(r"(?i)nome[ \t]*fantasia[ \t]*[:\-]?[ \t]*([^\r\n]+)").unwrap(),
    ];

    pub static ref LEGAL_NAME_INLINE: [Regex; 2] = [
        Regex::new(
            r"(?im)raz[ãa]o[ \t]*social[ \t]*[:\-]?[ \t]*([A-Za-zÀ-ÿ0-9 \t'&.,\-]+?)[ \t]*$"
        ).unwrap(),
        Regex::new(r"(?i)raz[ãa]o[ \t]*social[ \t]*[:\-]?[ \t]*([^\r\n]+)").unwrap(),
    ];

    // Street
    pub static ref STREET_INLINE: [Regex; 3] = [
        Regex::new(r"(?im)\b((?:avenida|av\.?)[ \t]+[A-Za-zÀ-ÿ0-9 \t]+?)[ \t]*(?:,|$)").unwrap(),
        Regex::new(r"(?im)\b((?:rua|r\.?)[ \t]+[A-Za-zÀ-ÿ0-9 \t]+?)[ \t]*(?:,|$)").unwrap(),
        Regex::new(r"(?im)logradouro[ \t]*[:\-]?[ \t]*([A-Za-zÀ-ÿ0-9 \t,]+?)[ \t]*$").unwrap(),
    ];

    // Address number
    pub static ref NUMBER_LABEL: Regex = Regex::new(
        r"^(?:número|numero|nº|n░|num\.?)[:\-]?$"
    ).unwrap();

    pub static ref NUMBER_VALUE: Regex = Regex::new(r"^\d{1,5}[A-Za-z]?$").unwrap();

    pub static ref NUMBER_INLINE: Regex = Regex::new(
        r"(?m),[ \t]*(\d{1,5}[A-Za-z]?)[ \t]*(?:,|$)"
    ).unwrap();

    // Complement
    pub static ref COMPLEMENT_LABEL: Regex = Regex::new(
        r"^(?:complemento|apto|apartamento|bloco|sala|andar)[:\-]?$"
    ).unwrap();

    pub static ref COMPLEMENT_INLINE: [Regex; 3] = [
        Regex::new(
            r"(?i)\b(?:torre|bloco)[ \t]+[0-9A-Za-z]+[ \t]+(?:apto|apartamento|sala|andar)[ \t]+[0-9A-Za-z]+"
        ).unwrap(),
        Regex::new(r"(?i)\b(?:apto|apartamento|apt\.?)[ \t]+[0-9A-Za-z]+").unwrap(),
        Regex::new(r"(?i)\b(?:bloco|bl\.?)[ \t]+[0-9A-Za-z]+").unwrap(),
    ];

    // Neighborhood
    pub static ref NEIGHBORHOOD_LABEL: Regex = Regex::new(
        r"^(?:bairro\s*/?\s*distrito|bairro|distrito)[:\-]?$"
    ).unwrap();

    pub static ref NEIGHBORHOOD_INLINE: Regex = Regex::new(
        r"(?im)(?:bairro[ \t]*/?[ \t]*distrito|bairro|distrito)[ \t]*[:\-]?[ \t]*([A-Za-zÀ-ÿ \t]+?)[ \t]*(?:,|$)"
    ).unwrap();

    // City
    pub static ref CITY_LABEL: Regex = Regex::new(
        r"^(?:cidade|município|municipio)[:\-]?$"
    ).unwrap();

    pub static ref CITY_INLINE: Regex = Regex::new(
        r"(?im)(?:cidade|munic[íi]pio)[ \t]*[:\-]?[ \t]*([A-Za-zÀ-ÿ \t\-]+?)[ \t]*(?:[,/]|[ \t]-|$)"
    ).unwrap();

    // State (UF)
    pub static ref STATE_LABEL: Regex = Regex::new(
        r"^(?:uf\s*/?\s*estado|uf|estado)[:\-]?$"
    ).unwrap();

    pub static ref STATE_VALUE: Regex = Regex::new(r"^[A-Za-z]{2}$").unwrap();

    pub static ref STATE_CODE_LINE: Regex = Regex::new(r"^[A-Z]{2}$").unwrap();

    pub static ref STATE_LABELED: Regex = Regex::new(
        r"(?i)\b(?:uf[ \t]*/?[ \t]*estado|uf|estado)[ \t]*[:\-]?[ \t]*([A-Z]{2})\b"
    ).unwrap();

    pub static ref STATE_BARE: Regex = Regex::new(r"\b([A-Z]{2})\b").unwrap();
}
