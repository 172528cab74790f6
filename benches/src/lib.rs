//! Shared inputs for the sqllexrs benchmarks.

/// Statements representative of what a web admin UI renders.
pub const SAMPLE_STATEMENTS: &[&str] = &[
    "SELECT * FROM users WHERE id = 1;",
    "SELECT COUNT(*), MAX(created_at) FROM orders GROUP BY customer_id;",
    "INSERT INTO log (msg, at) VALUES ('it''s done', NOW());",
    "CREATE TABLE t (id INT UNSIGNED AUTO_INCREMENT, name VARCHAR(255), PRIMARY KEY (id));",
    "UPDATE `order` SET state = 'shipped' /* bulk update */ WHERE id IN (1, 2, 3);",
    "SELECT a <=> b FROM t WHERE note LIKE '%x%' -- trailing comment\n;",
];

/// A multi-statement script with a `DELIMITER` directive, the shape of a
/// stored-procedure dump.
pub const PROCEDURE_SCRIPT: &str = "DELIMITER //\n\
    CREATE PROCEDURE audit_tick()\n\
    BEGIN\n\
      INSERT INTO audit (at) VALUES (NOW());\n\
      SELECT COUNT(*) FROM audit;\n\
    END//\n\
    DELIMITER ;\n\
    SELECT 1;\n";

/// Grows a statement to roughly `size` bytes by appending predicates.
pub fn statement_of_size(size: usize) -> String {
    let mut sql = String::from("SELECT * FROM t WHERE id = 1");
    while sql.len() < size {
        sql.push_str(" AND col = 'val'");
    }
    sql.push(';');
    sql
}
