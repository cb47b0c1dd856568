use gateway::read_only::ensure_read_only;
use gateway::GatewayError;
use tokio_test::{assert_err, assert_ok};

#[test]
fn test_read_queries_pass() {
    for query in [
        "MATCH (t:Team) RETURN t.name, t.shortName ORDER BY t.name",
        "MATCH (g:Game)-[:PART_OF]->(s:Season {name: '2024/2025'}) RETURN g.date, g.score ORDER BY g.date DESC LIMIT 5",
        "MATCH (t:Team) WHERE t.name = 'Create Delete Set' RETURN t",
        "MATCH (t:`Merge`) RETURN t",
        "// DELETE everything\nMATCH (n) RETURN count(n)",
        "MATCH (n) /* SET n.x = 1 */ RETURN n LIMIT 10",
        "MATCH (p:Player) WHERE p.lastName = \"O\\\"Remove\" RETURN p",
        "CALL db.labels() YIELD label RETURN label",
        "MATCH (g:Game) WHERE g.description CONTAINS 'offset' RETURN g",
        "MATCH (n:Penalty) RETURN n.set, n.remove, n. drop",
        "CALL db.relationshipTypes() YIELD relationshipType RETURN relationshipType",
        "CALL db.schema.visualization()",
        "CALL `db`.`propertyKeys`() YIELD propertyKey RETURN propertyKey",
        "CALL { MATCH (t:Team) RETURN t } RETURN count(t)",
        "MATCH (t:`CALL apoc`) RETURN t",
    ] {
        assert_ok!(ensure_read_only(query), "{query}");
    }
}

#[test]
fn test_write_queries_fail() {
    for (query, keyword) in [
        ("CREATE (t:Team {name: 'Modo'})", "CREATE"),
        ("MATCH (n) DETACH DELETE n", "DETACH"),
        ("MATCH (t:Team) SET t.shortName = 'X'", "SET"),
        ("MATCH (t:Team) REMOVE t.shortName", "REMOVE"),
        ("MERGE (s:Season {name: '2025/2026'})", "MERGE"),
        ("DROP INDEX team_name", "DROP"),
        ("LOAD   CSV FROM 'file:///x.csv' AS row RETURN row", "LOAD CSV"),
        ("MATCH (n) FOREACH (x IN [1] | SET n.y = x)", "FOREACH"),
        ("CALL dbms.security.createUser('x', 'y', false)", "dbms.security.createUser"),
        ("call apoc.periodic.iterate('MATCH (n) RETURN n', 'RETURN 1', {})", "apoc.periodic.iterate"),
        ("CALL `apoc.create.node`(['Team'], {name: 'X'})", "apoc.create.node"),
        ("CALL `apoc`.create.node(['Team'], {})", "apoc.create.node"),
        ("CALL /* hidden */ apoc.create.node(['Team'], {})", "apoc.create.node"),
        ("CALL db.createLabel('Hacked')", "db.createLabel"),
        ("CALL db.createProperty('hacked')", "db.createProperty"),
        ("CALL db.schema()", "db.schema"),
        ("MATCH (t:Team) CALL { WITH t DELETE t } IN TRANSACTIONS", "DELETE"),
        ("CALL { MATCH (n) RETURN n } IN TRANSACTIONS RETURN 1", "IN TRANSACTIONS"),
        ("MATCH (n) SET n.set = 1", "SET"),
    ] {
        let err = assert_err!(ensure_read_only(query), "{query}");
        match err {
            GatewayError::Validation(message) => {
                assert!(message.contains(keyword), "{query}: {message}")
            }
            other => panic!("{query}: expected validation error, got {other:?}"),
        }
    }
}
