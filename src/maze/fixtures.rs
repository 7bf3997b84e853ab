//! Labyrinthes de test partagés par les modules.

use crate::maze::ascii_utils::parse_grid;
use crate::maze::grid::Grid;

fn grid(text: &str) -> Grid {
    match parse_grid(text) {
        Ok(grid) => grid,
        Err(e) => panic!("invalid fixture: {}\n{}", e, text),
    }
}

/// Un seul couloir droit, sans embranchement.
pub fn corridor() -> Grid {
    grid(
        "\
########
#S    D#
########",
    )
}

/// Deux embranchements, aucune boucle.
pub fn t_junction() -> Grid {
    grid(
        "\
#######
#    D#
### ###
#S    #
#######",
    )
}

/// Une boucle entre deux embranchements, départ et arrivée en culs-de-sac.
pub fn ring_with_spurs() -> Grid {
    grid(
        "\
#######
#     #
# #D# #
# ### #
#     #
### ###
###S###
#######",
    )
}

/// Une boucle sans embranchement qui passe par le départ et l'arrivée.
pub fn ring_through_anchors() -> Grid {
    grid(
        "\
#######
#     #
#D### #
# ### #
#  S  #
#######",
    )
}

/// Boucle à deux moitiés inégales (3 et 5 cases) entre deux couloirs.
pub fn uneven_ring() -> Grid {
    grid(
        "\
#######
##   ##
#S # D#
## # ##
##   ##
#######",
    )
}

/// Départ entièrement emmuré, arrivée au bout d'un couloir.
pub fn enclosed_start() -> Grid {
    grid(
        "\
#######
#S#  D#
#######",
    )
}

/// Départ emmuré, et une boucle que le marcheur ne peut jamais atteindre.
pub fn enclosed_start_with_loop() -> Grid {
    grid(
        "\
#######
#S#   #
### # #
#D    #
#######",
    )
}

/// Un couloir droit de S à D, et à côté une zone à boucles sans accès.
pub fn detached_loop() -> Grid {
    grid(
        "\
#########
#S     D#
#########
#       #
#  ###  #
#       #
#########",
    )
}

/// Anneau sans embranchement qui passe par le départ ; l'arrivée est à part.
pub fn ring_around_start() -> Grid {
    grid(
        "\
#######
#S    #
# ### #
#     #
#######
#D    #
#######",
    )
}

/// Anneau sans embranchement où le départ et l'arrivée sont voisins.
pub fn adjacent_anchors_ring() -> Grid {
    grid(
        "\
######
#SD  #
# ## #
#    #
######",
    )
}

pub fn all() -> Vec<Grid> {
    vec![
        corridor(),
        t_junction(),
        ring_with_spurs(),
        ring_through_anchors(),
        uneven_ring(),
        enclosed_start(),
        enclosed_start_with_loop(),
        detached_loop(),
        ring_around_start(),
        adjacent_anchors_ring(),
    ]
}
