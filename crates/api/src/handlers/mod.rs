pub mod atendimento;
pub mod auth;
pub mod cliente;
pub mod dashboard;
pub mod funcionario;
pub mod pet;
pub mod produto;
pub mod servico;
pub mod solicitacao;
pub mod venda;
