// src/models/aluno.rs
use serde::{Deserialize, Serialize};

/// Um aluno tal como circula na API (JSON).
///
/// Os nomes antigos dos campos (`datanasc`, `serie`, `cpf`) continuam
/// aceites na entrada para manter compatibilidade com clientes existentes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Aluno {
    // Atribuído apenas pela base de dados
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "name", alias = "nome")]
    pub nome: String,
    #[serde(rename = "birth_date", alias = "datanasc")]
    pub data_nascimento: String,
    #[serde(rename = "grade", alias = "serie")]
    pub serie: String,
    pub email: String,
    // Derivado; nunca é guardado
    #[serde(rename = "age", alias = "idade", default, skip_serializing_if = "Option::is_none")]
    pub idade: Option<u32>,
    #[serde(rename = "national_id", alias = "cpf", default, skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
}

/// Documento persistido na coleção: todos os campos exceto `id` e `idade`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlunoDocumento {
    pub name: String,
    pub birth_date: String,
    pub grade: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_id: Option<String>,
}

impl AlunoDocumento {
    pub fn into_aluno(self, id: String) -> Aluno {
        Aluno {
            id: Some(id),
            nome: self.name,
            data_nascimento: self.birth_date,
            serie: self.grade,
            email: self.email,
            idade: None,
            cpf: self.national_id,
        }
    }
}

impl From<&Aluno> for AlunoDocumento {
    fn from(aluno: &Aluno) -> Self {
        Self {
            name: aluno.nome.clone(),
            birth_date: aluno.data_nascimento.clone(),
            grade: aluno.serie.clone(),
            email: aluno.email.clone(),
            national_id: aluno.cpf.clone(),
        }
    }
}
