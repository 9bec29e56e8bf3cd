//! # Statute Catalog Module
//!
//! ## Purpose
//! Fixed, immutable table of legal-reference records (constitutional articles
//! and statutory sections) looked up by identifier. The catalog is read-only
//! process-wide state initialized once at startup; no runtime mutation API
//! exists.
//!
//! ## Input/Output Specification
//! - **Input**: Statute identifiers (e.g. "21", "IPC 302", "IT Act 66C")
//! - **Output**: `StatuteRecord` references; unknown ids yield `None`, never an error
//! - **Sources**: Embedded table (default) or a JSON file with the same schema
//!
//! ## Key Features
//! - Deterministic, total lookup over the fixed table
//! - Pluggable data source: swapping the embedded table for a file must not
//!   change classifier or mapper behavior
//! - Safe to share across any number of concurrent analysis calls

use crate::errors::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// A single legal-reference record. Identity is the `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatuteRecord {
    /// Identifier: a bare constitutional article number ("21") or a prefixed
    /// section code ("IPC 302", "POCSO 7")
    pub id: String,
    /// Short name of the provision
    pub title: String,
    /// Explanatory text shown in reports
    pub description: String,
}

/// Read-only catalog of statute records, keyed by identifier
pub struct StatuteCatalog {
    records: Vec<StatuteRecord>,
    index: HashMap<String, usize>,
}

impl StatuteCatalog {
    /// Build the catalog from the embedded record table
    pub fn builtin() -> Self {
        let records = BUILTIN_RECORDS
            .iter()
            .map(|(id, title, description)| StatuteRecord {
                id: (*id).to_string(),
                title: (*title).to_string(),
                description: (*description).to_string(),
            })
            .collect();
        Self::from_records(records)
    }

    /// Build the catalog from an explicit record list
    pub fn from_records(records: Vec<StatuteRecord>) -> Self {
        let index = records
            .iter()
            .enumerate()
            .map(|(i, record)| (record.id.clone(), i))
            .collect();
        Self { records, index }
    }

    /// Load the catalog from a JSON file containing an array of records
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| AnalysisError::CatalogLoad {
            source_path: path.to_string_lossy().to_string(),
            details: e.to_string(),
        })?;

        let records: Vec<StatuteRecord> =
            serde_json::from_str(&content).map_err(|e| AnalysisError::CatalogLoad {
                source_path: path.to_string_lossy().to_string(),
                details: format!("Invalid catalog JSON: {}", e),
            })?;

        tracing::info!("Loaded {} statute records from {:?}", records.len(), path);
        Ok(Self::from_records(records))
    }

    /// Look up a record by identifier. Unknown ids yield `None`.
    pub fn lookup(&self, id: &str) -> Option<&StatuteRecord> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    /// Number of records in the catalog
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate all records in table order
    pub fn iter(&self) -> impl Iterator<Item = &StatuteRecord> {
        self.records.iter()
    }
}

/// Embedded statute table: constitutional articles, Indian Penal Code
/// sections, and special-act sections referenced by the mapper and rationale
/// tables. Descriptions are short educational summaries, not legal text.
const BUILTIN_RECORDS: &[(&str, &str, &str)] = &[
    // Constitutional articles
    (
        "14",
        "Equality before law",
        "The State shall not deny to any person equality before the law or the equal protection of the laws.",
    ),
    (
        "15",
        "Prohibition of discrimination",
        "Prohibits discrimination on grounds of religion, race, caste, sex or place of birth.",
    ),
    (
        "19",
        "Protection of certain freedoms",
        "Guarantees freedom of speech and expression, assembly, association, movement, residence and profession.",
    ),
    (
        "21",
        "Protection of life and personal liberty",
        "No person shall be deprived of his life or personal liberty except according to procedure established by law.",
    ),
    (
        "22",
        "Protection against arrest and detention",
        "Safeguards for persons who are arrested or detained, including the right to be informed of the grounds of arrest.",
    ),
    // Penal code: homicide and shared-liability provisions
    (
        "IPC 302",
        "Punishment for murder",
        "Whoever commits murder shall be punished with death or imprisonment for life, and shall also be liable to fine.",
    ),
    (
        "IPC 307",
        "Attempt to murder",
        "Attempting an act with such intention or knowledge that, if death were caused, the offender would be guilty of murder.",
    ),
    (
        "IPC 120B",
        "Punishment of criminal conspiracy",
        "Being party to a criminal conspiracy to commit an offence.",
    ),
    (
        "IPC 34",
        "Common intention",
        "When a criminal act is done by several persons in furtherance of the common intention of all, each is liable as if done by him alone.",
    ),
    (
        "IPC 201",
        "Causing disappearance of evidence",
        "Causing evidence of an offence to disappear, or giving false information to screen the offender.",
    ),
    (
        "IPC 297",
        "Trespassing on burial places",
        "Indignity to a human corpse or disturbance at funeral or burial places.",
    ),
    // Robbery and dacoity
    (
        "IPC 392",
        "Punishment for robbery",
        "Whoever commits robbery shall be punished with rigorous imprisonment.",
    ),
    (
        "IPC 397",
        "Robbery with attempt to cause death or grievous hurt",
        "Use of a deadly weapon, or causing or attempting grievous hurt, while committing robbery or dacoity.",
    ),
    (
        "IPC 398",
        "Attempt to commit robbery when armed",
        "Attempting robbery or dacoity while armed with a deadly weapon.",
    ),
    (
        "IPC 394",
        "Voluntarily causing hurt in committing robbery",
        "Causing hurt while committing or attempting to commit robbery.",
    ),
    (
        "IPC 395",
        "Punishment for dacoity",
        "Robbery committed conjointly by five or more persons.",
    ),
    // Theft and related property offences
    (
        "IPC 379",
        "Punishment for theft",
        "Dishonestly taking movable property out of the possession of any person without consent.",
    ),
    (
        "IPC 380",
        "Theft in dwelling house",
        "Theft in any building, tent or vessel used as a human dwelling or for the custody of property.",
    ),
    (
        "IPC 457",
        "House-breaking by night",
        "Lurking house-trespass or house-breaking by night in order to commit an offence.",
    ),
    (
        "IPC 454",
        "House-breaking to commit an offence",
        "Lurking house-trespass or house-breaking in order to commit an offence punishable with imprisonment.",
    ),
    (
        "IPC 411",
        "Receiving stolen property",
        "Dishonestly receiving or retaining stolen property, knowing or having reason to believe it to be stolen.",
    ),
    // Cheating and forgery
    (
        "IPC 420",
        "Cheating and dishonestly inducing delivery of property",
        "Cheating that dishonestly induces the person deceived to deliver property or alter a valuable security.",
    ),
    (
        "IPC 415",
        "Cheating",
        "Deceiving a person fraudulently or dishonestly to induce delivery of property or a harmful act or omission.",
    ),
    (
        "IPC 417",
        "Punishment for cheating",
        "Simple cheating not covered by an aggravated form.",
    ),
    (
        "IPC 468",
        "Forgery for purpose of cheating",
        "Committing forgery intending that the forged document be used for cheating.",
    ),
    (
        "IPC 471",
        "Using a forged document as genuine",
        "Fraudulently or dishonestly using as genuine any document known to be forged.",
    ),
    // Assault and insult
    (
        "IPC 351",
        "Assault",
        "A gesture or preparation intending or knowing it likely to cause apprehension of criminal force.",
    ),
    (
        "IPC 352",
        "Punishment for assault or criminal force",
        "Assault or use of criminal force otherwise than on grave and sudden provocation.",
    ),
    (
        "IPC 323",
        "Punishment for voluntarily causing hurt",
        "Voluntarily causing hurt otherwise than on grave and sudden provocation.",
    ),
    (
        "IPC 504",
        "Intentional insult to provoke breach of peace",
        "Insulting a person intending or knowing it likely to provoke a breach of the public peace.",
    ),
    // Offences against women
    (
        "IPC 354",
        "Assault or criminal force to woman to outrage her modesty",
        "Assault or criminal force to any woman, intending to outrage or knowing it likely to outrage her modesty.",
    ),
    (
        "IPC 354A",
        "Sexual harassment",
        "Physical contact and advances, demands for sexual favours, showing pornography, or sexually coloured remarks.",
    ),
    (
        "IPC 509",
        "Word, gesture or act intended to insult the modesty of a woman",
        "Uttering any word, making any sound or gesture, or exhibiting any object intending to insult the modesty of a woman.",
    ),
    // Intimidation and defamation
    (
        "IPC 503",
        "Criminal intimidation",
        "Threatening another with injury to person, reputation or property to cause alarm or compel an act or omission.",
    ),
    (
        "IPC 506",
        "Punishment for criminal intimidation",
        "Punishment for criminal intimidation; aggravated where the threat is to cause death or grievous hurt.",
    ),
    (
        "IPC 507",
        "Criminal intimidation by anonymous communication",
        "Criminal intimidation by anonymous communication or having concealed the name or abode of the threatener.",
    ),
    (
        "IPC 499",
        "Defamation",
        "Harming the reputation of a person by words, signs or visible representations.",
    ),
    (
        "IPC 500",
        "Punishment for defamation",
        "Punishment for defaming another person.",
    ),
    // Family and child provisions
    (
        "IPC 498A",
        "Cruelty by husband or relatives of husband",
        "Subjecting a married woman to cruelty by her husband or his relatives, including dowry-related harassment.",
    ),
    (
        "IPC 75",
        "Cruelty to a child",
        "Assault, abandonment, neglect or exposure of a child in a manner likely to cause unnecessary suffering; commonly charged with the Juvenile Justice Act.",
    ),
    (
        "IPC 82",
        "Act of a child under seven years of age",
        "Nothing is an offence which is done by a child under seven years of age.",
    ),
    // Sexual offences
    (
        "IPC 376",
        "Punishment for rape",
        "Punishment for rape; aggravated forms carry higher minimum sentences.",
    ),
    (
        "IPC 228A",
        "Disclosure of identity of victims of certain offences",
        "Printing or publishing the name or identifying information of victims of certain sexual offences.",
    ),
    // Public health and negligence
    (
        "IPC 272",
        "Adulteration of food or drink intended for sale",
        "Adulterating any article of food or drink so as to make it noxious, intending to sell it.",
    ),
    (
        "IPC 273",
        "Sale of noxious food or drink",
        "Selling any article of food or drink which has been rendered noxious or is unfit for consumption.",
    ),
    (
        "IPC 304A",
        "Causing death by negligence",
        "Causing the death of any person by a rash or negligent act not amounting to culpable homicide.",
    ),
    // Property trespass and mischief
    (
        "IPC 441",
        "Criminal trespass",
        "Entering property in the possession of another with intent to commit an offence or to intimidate, insult or annoy.",
    ),
    (
        "IPC 427",
        "Mischief causing damage",
        "Mischief causing loss or damage to property of the value of fifty rupees or upwards.",
    ),
    // Information Technology Act
    (
        "IT Act 66C",
        "Identity theft",
        "Fraudulent or dishonest use of the electronic signature, password or other unique identification of another person.",
    ),
    (
        "IT Act 66D",
        "Cheating by personation using a computer resource",
        "Cheating by personation by means of any communication device or computer resource.",
    ),
    (
        "IT Act 67",
        "Publishing obscene material in electronic form",
        "Publishing or transmitting obscene material in electronic form.",
    ),
    // Special acts
    (
        "DV Act 3",
        "Definition of domestic violence",
        "Physical, sexual, verbal, emotional and economic abuse within a domestic relationship under the Protection of Women from Domestic Violence Act.",
    ),
    (
        "POCSO 3",
        "Penetrative sexual assault",
        "Penetrative sexual assault on a child under the Protection of Children from Sexual Offences Act.",
    ),
    (
        "POCSO 7",
        "Sexual assault",
        "Sexual contact with a child without penetration, under the POCSO Act.",
    ),
    (
        "POCSO 9",
        "Aggravated sexual assault",
        "Sexual assault on a child committed by a person in a position of trust or authority, under the POCSO Act.",
    ),
    (
        "CPA 2",
        "Consumer Protection Act definitions",
        "Defines consumer, defect, deficiency and unfair trade practice for consumer disputes.",
    ),
    (
        "Rent Act",
        "Rent control legislation",
        "State rent control law governing tenancy terms, essential services and protection against unlawful eviction.",
    ),
    (
        "MV Act 134",
        "Duty of driver in case of accident",
        "Duties of a driver when an accident occurs, including securing medical attention and reporting to the police.",
    ),
];
