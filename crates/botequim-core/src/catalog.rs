//! Compiled-in catalogs of ingredients and recipes.
//!
//! The catalogs are configuration data, not game state: built once, never
//! mutated, and referenced by code/name lookups from the mutation engine.
//! Codes follow the printed card decks: `I-[score]-0-[id]` for ingredients
//! and `R-[value]-[state]-[id]` for recipes.
//!
//! # Usage
//!
//! ```
//! use botequim_core::catalog;
//!
//! let siri = catalog::ingredient_by_code("i-4-0-36 ").unwrap();
//! assert_eq!(siri.name, "Siri");
//!
//! let recipe = catalog::recipe_by_code("R-9-AL-1").unwrap();
//! assert_eq!(recipe.name, "Fritada de Siri");
//! assert_eq!(recipe.value, 9);
//! ```

use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Default document path (session code) shared by every tab of one table.
pub const SESSION_CODE: &str = "TAB-0-0-0";

/// Flat price of the "Saco Surpresa" (one random ingredient).
pub const SURPRISE_BAG_PRICE: u32 = 4;

/// Flat price of "A Encomenda" (one ingredient of the buyer's choice).
pub const CUSTOM_ORDER_PRICE: u32 = 16;

/// Fixed income credited when a player claims a new round.
pub const ROUND_INCOME: u32 = 2;

/// A purchasable ingredient card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ingredient {
    pub code: &'static str,
    pub name: &'static str,
    /// Base score; the shop shelf sells at `score + 2`.
    pub score: u32,
}

impl Ingredient {
    /// What the shop shelf charges for this ingredient.
    pub fn shelf_price(&self) -> u32 {
        self.score + 2
    }
}

/// A recipe card a player can put on the fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recipe {
    pub code: &'static str,
    pub name: &'static str,
    /// Printed value; the delivery reward is derived from this.
    pub value: u32,
    /// Two-letter region code, see [`STATES`].
    pub state: &'static str,
    /// Required ingredients, by display name.
    pub ingredients: &'static [&'static str],
    pub instructions: &'static str,
}

// ============================================================================
// STATIC CATALOG DATA
// ============================================================================

/// All 37 ingredient cards.
pub const INGREDIENTS: &[Ingredient] = &[
    Ingredient { code: "I-1-0-1", name: "Cebola", score: 1 },
    Ingredient { code: "I-1-0-2", name: "Leite", score: 1 },
    Ingredient { code: "I-1-0-3", name: "Ovos", score: 1 },
    Ingredient { code: "I-1-0-4", name: "Alho", score: 1 },
    Ingredient { code: "I-2-0-5", name: "Açúcar", score: 2 },
    Ingredient { code: "I-2-0-6", name: "Manteiga", score: 2 },
    Ingredient { code: "I-2-0-7", name: "Queijo Coalho", score: 2 },
    Ingredient { code: "I-3-0-8", name: "Pimentão", score: 3 },
    Ingredient { code: "I-3-0-9", name: "Coco", score: 3 },
    Ingredient { code: "I-3-0-10", name: "Carne de Sol", score: 3 },
    Ingredient { code: "I-3-0-11", name: "Tomate", score: 3 },
    Ingredient { code: "I-3-0-12", name: "Milho", score: 3 },
    Ingredient { code: "I-3-0-13", name: "Arroz", score: 3 },
    Ingredient { code: "I-3-0-14", name: "Leite Condensado", score: 3 },
    Ingredient { code: "I-3-0-15", name: "Carne", score: 3 },
    Ingredient { code: "I-3-0-16", name: "Farinha", score: 3 },
    Ingredient { code: "I-3-0-17", name: "Água", score: 3 },
    Ingredient { code: "I-3-0-18", name: "Feijão", score: 3 },
    Ingredient { code: "I-3-0-19", name: "Sal", score: 3 },
    Ingredient { code: "I-3-0-20", name: "Goma", score: 3 },
    Ingredient { code: "I-3-0-21", name: "Leite de Coco", score: 3 },
    Ingredient { code: "I-4-0-22", name: "Massa Base", score: 4 },
    Ingredient { code: "I-4-0-23", name: "Azeite de Dendê", score: 4 },
    Ingredient { code: "I-4-0-24", name: "Camarão", score: 4 },
    Ingredient { code: "I-4-0-25", name: "Peixe", score: 4 },
    Ingredient { code: "I-4-0-26", name: "Batata", score: 4 },
    Ingredient { code: "I-4-0-27", name: "Cuscuz", score: 4 },
    Ingredient { code: "I-4-0-28", name: "Amendoim", score: 4 },
    Ingredient { code: "I-4-0-29", name: "Manteiga de Garrafa", score: 4 },
    Ingredient { code: "I-4-0-30", name: "Capote", score: 4 },
    Ingredient { code: "I-4-0-31", name: "Vatapá", score: 4 },
    Ingredient { code: "I-4-0-32", name: "Vinho", score: 4 },
    Ingredient { code: "I-4-0-33", name: "Frutas Secas", score: 4 },
    Ingredient { code: "I-4-0-34", name: "Goiabada", score: 4 },
    Ingredient { code: "I-4-0-35", name: "Vinagrete", score: 4 },
    Ingredient { code: "I-4-0-36", name: "Siri", score: 4 },
    Ingredient { code: "I-4-0-37", name: "Umbu", score: 4 },
];

/// All 36 recipe cards.
pub const RECIPES: &[Recipe] = &[
    Recipe { code: "R-9-AL-1", name: "Fritada de Siri", value: 9, state: "AL", ingredients: &["Siri", "Ovos", "Leite de Coco", "Cebola"], instructions: "Refogue a cebola, adicione o siri e leite de coco. Cubra com ovos batidos e asse/frite até dourar." },
    Recipe { code: "R-6-AL-2", name: "Cocada da Massagueira", value: 6, state: "AL", ingredients: &["Açúcar", "Coco", "Leite"], instructions: "Cozinhe açúcar e leite até formar calda; adicione coco e mexa até desgrudar do fundo." },
    Recipe { code: "R-19-AL-3", name: "Peixada Alagoana", value: 19, state: "AL", ingredients: &["Peixe", "Batata", "Cebola", "Leite de Coco", "Alho", "Pimentão", "Tomate"], instructions: "Camadas de vegetais e peixe temperado, regadas com leite de coco e cozidas no vapor." },
    Recipe { code: "R-19-BA-4", name: "Acarajé", value: 19, state: "BA", ingredients: &["Feijão", "Camarão", "Azeite de Dendê", "Vatapá", "Vinagrete"], instructions: "Massa de feijão frita no dendê, recheada com vatapá, camarão e vinagrete." },
    Recipe { code: "R-8-BA-5", name: "Bala Baiana", value: 8, state: "BA", ingredients: &["Leite Condensado", "Coco", "Açúcar"], instructions: "Brigadeiro de coco enrolado e banhado em calda de açúcar em ponto de vidro." },
    Recipe { code: "R-9-BA-6", name: "Boliviano", value: 9, state: "BA", ingredients: &["Carne", "Farinha", "Ovos", "Açúcar"], instructions: "Massa cozida recheada com carne moída, frita e passada no açúcar." },
    Recipe { code: "R-10-CE-7", name: "Baião de Dois", value: 10, state: "CE", ingredients: &["Arroz", "Feijão", "Queijo Coalho", "Alho", "Cebola"], instructions: "Arroz e feijão cozidos juntos com refogado e finalizados com cubos de queijo coalho." },
    Recipe { code: "R-7-CE-8", name: "Bolo Liso", value: 7, state: "CE", ingredients: &["Leite", "Farinha", "Manteiga", "Ovos"], instructions: "Massa líquida sem fermento, assada até ganhar textura de pudim firme." },
    Recipe { code: "R-5-CE-9", name: "Panelada", value: 5, state: "CE", ingredients: &["Carne", "Alho", "Cebola"], instructions: "Bucho e tripas limpos, cozidos na pressão com temperos até ficarem macios e o caldo engrossar." },
    Recipe { code: "R-15-MA-10", name: "Arroz de Cuxá", value: 15, state: "MA", ingredients: &["Arroz", "Camarão", "Alho", "Cebola", "Pimentão", "Tomate"], instructions: "Arroz cozido com camarão seco e refogado de vegetais para absorver o sabor do mar." },
    Recipe { code: "R-5-MA-11", name: "Bolo Casete", value: 5, state: "MA", ingredients: &["Goma", "Leite", "Ovos"], instructions: "Massa de goma escaldada, modelada e assada até ficar crocante por fora e macia por dentro." },
    Recipe { code: "R-13-MA-12", name: "Torta de Camarão Maranhense", value: 13, state: "MA", ingredients: &["Camarão", "Batata", "Ovos", "Cebola", "Pimentão"], instructions: "Purê de batata misturado com refogado de camarão, coberto com ovos em neve e gratinado." },
    Recipe { code: "R-7-PB-13", name: "Mungunzá Doce", value: 7, state: "PB", ingredients: &["Milho", "Leite", "Leite Condensado"], instructions: "Milho branco cozido na pressão, finalizado com leites até ficar cremoso." },
    Recipe { code: "R-9-PB-14", name: "Pastelzinho de Carne com Açúcar", value: 9, state: "PB", ingredients: &["Massa Base", "Carne", "Açúcar"], instructions: "Pastel de carne frito e imediatamente passado no açúcar." },
    Recipe { code: "R-20-PB-15", name: "Rubação", value: 20, state: "PB", ingredients: &["Arroz", "Feijão", "Carne de Sol", "Queijo Coalho", "Leite", "Vegetais"], instructions: "Baião cremoso com leite, carne de sol frita e muito queijo coalho derretido." },
    Recipe { code: "R-17-PE-16", name: "Bolo de Noiva", value: 17, state: "PE", ingredients: &["Massa Base", "Frutas Secas", "Vinho", "Manteiga", "Açúcar", "Ovos"], instructions: "Bolo denso e escuro com frutas maceradas no vinho e especiarias." },
    Recipe { code: "R-8-PE-17", name: "Bolo de Rolo", value: 8, state: "PE", ingredients: &["Massa Base", "Goiabada"], instructions: "Camadas finíssimas de massa assadas rapidamente e enroladas com goiabada derretida." },
    Recipe { code: "R-8-PE-18", name: "Feijão de Coco", value: 8, state: "PE", ingredients: &["Feijão", "Leite de Coco", "Alho", "Cebola"], instructions: "Feijão cozido e apurado com refogado e leite de coco até ficar cremoso." },
    Recipe { code: "R-16-PI-19", name: "Capote ao Molho", value: 16, state: "PI", ingredients: &["Capote", "Azeite de Dendê", "Alho", "Cebola", "Tomate", "Pimentão"], instructions: "Galinha-d'angola cozida lentamente com vegetais e um toque de dendê." },
    Recipe { code: "R-8-PI-20", name: "Maria Isabel", value: 8, state: "PI", ingredients: &["Arroz", "Carne de Sol", "Alho", "Cebola"], instructions: "Carne de sol frita e arroz cozido na mesma panela para pegar a cor e o sabor." },
    Recipe { code: "R-12-PI-21", name: "Paçoca de Carne de Sol no Pilão", value: 12, state: "PI", ingredients: &["Carne de Sol", "Farinha", "Manteiga de Garrafa", "Alho", "Cebola"], instructions: "Carne frita na manteiga e batida no pilão com farinha." },
    Recipe { code: "R-12-GE-22", name: "Bruaca", value: 12, state: "GE", ingredients: &["Farinha", "Leite", "Açúcar", "Ovos", "Manteiga", "Sal"], instructions: "Massa de panqueca grossa dourada na frigideira untada." },
    Recipe { code: "R-11-GE-23", name: "Canjica", value: 11, state: "GE", ingredients: &["Milho", "Leite", "Açúcar", "Manteiga", "Água"], instructions: "Suco de milho verde cozido com leite e açúcar até virar um creme firme." },
    Recipe { code: "R-7-GE-24", name: "Cuscuz com Ovo", value: 7, state: "GE", ingredients: &["Cuscuz", "Ovos", "Manteiga"], instructions: "Cuscuz no vapor servido com ovos fritos na manteiga por cima." },
    Recipe { code: "R-6-GE-25", name: "Dadinho de Tapioca", value: 6, state: "GE", ingredients: &["Goma", "Queijo Coalho", "Leite"], instructions: "Mistura de tapioca granulada e queijo coalho hidratada com leite quente, resfriada e frita." },
    Recipe { code: "R-9-GE-26", name: "Milho Cozido", value: 9, state: "GE", ingredients: &["Milho", "Água", "Sal"], instructions: "Espigas de milho cozidas em água salgada até ficarem macias." },
    Recipe { code: "R-13-GE-27", name: "Pamonha", value: 13, state: "GE", ingredients: &["Milho", "Açúcar", "Manteiga", "Sal", "Água"], instructions: "Massa de milho temperada, cozida dentro da própria palha em água fervente." },
    Recipe { code: "R-8-GE-36", name: "Tapioca Recheada", value: 8, state: "GE", ingredients: &["Goma", "Carne de Sol", "Queijo Coalho"], instructions: "Disco de goma hidratada recheado com ingredientes típicos à escolha." },
    Recipe { code: "R-8-GE-28", name: "Umbuzada", value: 8, state: "GE", ingredients: &["Umbu", "Leite", "Leite Condensado"], instructions: "Polpa de umbu cozida e batida com leites para um resultado agridoce e encorpado." },
    Recipe { code: "R-19-GE-29", name: "Moqueca", value: 19, state: "GE", ingredients: &["Peixe", "Leite de Coco", "Azeite de Dendê", "Vegetais"], instructions: "Peixe cozido em panela de barro com camadas de vegetais, dendê e leite de coco." },
    Recipe { code: "R-6-RN-30", name: "Arroz de Leite (Salgado)", value: 6, state: "RN", ingredients: &["Arroz", "Leite", "Queijo Coalho"], instructions: "Arroz finalizado com leite para dar cremosidade e cubos de queijo coalho." },
    Recipe { code: "R-9-RN-31", name: "Cuscuz Potiguar", value: 9, state: "RN", ingredients: &["Cuscuz", "Carne de Sol", "Queijo Coalho"], instructions: "Cuscuz misturado com carne de sol crocante e cubos de queijo." },
    Recipe { code: "R-10-RN-32", name: "Ginga com Tapioca", value: 10, state: "RN", ingredients: &["Peixe", "Goma", "Coco"], instructions: "Peixinhos fritos inteiros servidos dentro de uma tapioca com coco." },
    Recipe { code: "R-10-SE-33", name: "Amendoim Cozido", value: 10, state: "SE", ingredients: &["Amendoim", "Água", "Sal"], instructions: "Amendoim na casca cozido na pressão com sal." },
    Recipe { code: "R-12-SE-34", name: "Manuê (Bolo de Milho)", value: 12, state: "SE", ingredients: &["Milho", "Coco", "Leite", "Manteiga", "Açúcar", "Ovos"], instructions: "Bolo de milho batido com coco ralado, textura entre bolo e pamonha." },
    Recipe { code: "R-9-SE-35", name: "Queijadinha", value: 9, state: "SE", ingredients: &["Queijo Coalho", "Coco", "Leite Condensado", "Ovos"], instructions: "Doce de coco e queijo coalho assado até dourar." },
];

/// Region codes to display names.
pub const STATES: &[(&str, &str)] = &[
    ("AL", "Alagoas"),
    ("PI", "Piauí"),
    ("BA", "Bahia"),
    ("CE", "Ceará"),
    ("MA", "Maranhão"),
    ("PB", "Paraíba"),
    ("PE", "Pernambuco"),
    ("RN", "Rio Grande do Norte"),
    ("SE", "Sergipe"),
    ("GE", "Geral"),
];

// ============================================================================
// LOOKUP TABLES
// ============================================================================

fn ingredient_code_index() -> &'static BTreeMap<&'static str, &'static Ingredient> {
    static INDEX: OnceLock<BTreeMap<&'static str, &'static Ingredient>> = OnceLock::new();
    INDEX.get_or_init(|| INGREDIENTS.iter().map(|i| (i.code, i)).collect())
}

fn ingredient_name_index() -> &'static BTreeMap<&'static str, &'static Ingredient> {
    static INDEX: OnceLock<BTreeMap<&'static str, &'static Ingredient>> = OnceLock::new();
    INDEX.get_or_init(|| INGREDIENTS.iter().map(|i| (i.name, i)).collect())
}

fn recipe_code_index() -> &'static BTreeMap<&'static str, &'static Recipe> {
    static INDEX: OnceLock<BTreeMap<&'static str, &'static Recipe>> = OnceLock::new();
    INDEX.get_or_init(|| RECIPES.iter().map(|r| (r.code, r)).collect())
}

/// Uppercase-trimmed canonical form of a typed-in card code.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Ingredient lookup by code. Input is normalized first.
pub fn ingredient_by_code(code: &str) -> Option<&'static Ingredient> {
    ingredient_code_index()
        .get(normalize_code(code).as_str())
        .copied()
}

/// Ingredient lookup by display name (exact, case-sensitive).
pub fn ingredient_by_name(name: &str) -> Option<&'static Ingredient> {
    ingredient_name_index().get(name).copied()
}

/// Recipe lookup by code. Input is normalized first.
pub fn recipe_by_code(code: &str) -> Option<&'static Recipe> {
    recipe_code_index().get(normalize_code(code).as_str()).copied()
}

/// One uniformly random ingredient from the whole catalog.
pub fn random_ingredient() -> &'static Ingredient {
    use rand::seq::IndexedRandom;

    INGREDIENTS
        .choose(&mut rand::rng())
        .expect("ingredient catalog is never empty")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn catalog_codes_are_unique() {
        let ingredient_codes: BTreeSet<_> = INGREDIENTS.iter().map(|i| i.code).collect();
        assert_eq!(ingredient_codes.len(), INGREDIENTS.len());

        let recipe_codes: BTreeSet<_> = RECIPES.iter().map(|r| r.code).collect();
        assert_eq!(recipe_codes.len(), RECIPES.len());

        // Ingredient and recipe namespaces never overlap.
        assert!(ingredient_codes.is_disjoint(&recipe_codes));
    }

    #[test]
    fn codes_carry_their_printed_score_and_value() {
        for ing in INGREDIENTS {
            let printed: u32 = ing.code.split('-').nth(1).unwrap().parse().unwrap();
            assert_eq!(printed, ing.score, "{}", ing.code);
        }
        for recipe in RECIPES {
            let printed: u32 = recipe.code.split('-').nth(1).unwrap().parse().unwrap();
            assert_eq!(printed, recipe.value, "{}", recipe.code);
        }
    }

    #[test]
    fn lookup_normalizes_case_and_whitespace() {
        assert_eq!(ingredient_by_code(" i-4-0-36 ").unwrap().name, "Siri");
        assert_eq!(recipe_by_code("r-9-al-1").unwrap().name, "Fritada de Siri");
        assert!(ingredient_by_code("X-0-0-0").is_none());
    }

    #[test]
    fn recipe_states_are_catalogued() {
        let known: BTreeSet<_> = STATES.iter().map(|(code, _)| *code).collect();
        for recipe in RECIPES {
            assert!(known.contains(recipe.state), "{}", recipe.code);
        }
    }

    #[test]
    fn shelf_price_adds_flat_margin() {
        let cebola = ingredient_by_name("Cebola").unwrap();
        assert_eq!(cebola.shelf_price(), 3);
        let siri = ingredient_by_name("Siri").unwrap();
        assert_eq!(siri.shelf_price(), 6);
    }

    #[test]
    fn random_ingredient_comes_from_catalog() {
        for _ in 0..20 {
            let ing = random_ingredient();
            assert!(ingredient_by_code(ing.code).is_some());
        }
    }
}
